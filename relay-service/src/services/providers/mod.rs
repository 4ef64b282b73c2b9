//! Generation provider abstraction.
//!
//! The relay only needs single-turn text completion, so the trait is a single
//! `generate` call. Gemini is the production backend; the mock backs tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0}")]
    ApiError(String),

    #[error("Gemini API rate limit exceeded")]
    RateLimited,

    #[error("Response blocked by Gemini safety filters")]
    ContentFiltered,

    #[error("Gemini returned no text in its response")]
    EmptyResponse,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

/// A completed single-turn generation.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

/// Single-turn text generation.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`, used verbatim as the whole input.
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
