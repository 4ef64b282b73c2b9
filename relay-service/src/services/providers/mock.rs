//! Mock provider implementation for testing.

use super::{FinishReason, Generation, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Behavior {
    Echo,
    Fail(String),
}

/// Mock text provider for testing.
///
/// Counts calls so tests can assert that no outbound request was attempted.
pub struct MockTextProvider {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// Replies with `Mock response for: <prompt>`.
    pub fn echo() -> Self {
        Self {
            behavior: Behavior::Echo,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            Behavior::Echo => Ok(Generation {
                text: format!("Mock response for: {}", prompt),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 10,
                finish_reason: FinishReason::Complete,
            }),
            Behavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
