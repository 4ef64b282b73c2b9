//! relay-service: forwards chat messages to Gemini and logs the exchange
//! to an optional document store.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
