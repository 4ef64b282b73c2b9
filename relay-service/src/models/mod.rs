pub mod chat;
pub mod status;

pub use chat::{ChatRequest, ChatResponse, LogRecord};
pub use status::{HealthStatus, RootStatus};
