//! The chat relay: prompt in, generated text out, exchange logged on the side.

use crate::models::{ChatResponse, LogRecord};
use crate::services::log_store::LogStore;
use crate::services::providers::{ProviderError, TextProvider};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Gemini API key not configured. Please set GEMINI_API_KEY environment variable.")]
    MissingCredential,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Clone)]
pub struct RelayService {
    provider: Option<Arc<dyn TextProvider>>,
    log_store: Arc<dyn LogStore>,
}

impl RelayService {
    /// `provider` is `None` when no generation credential is configured.
    pub fn new(provider: Option<Arc<dyn TextProvider>>, log_store: Arc<dyn LogStore>) -> Self {
        Self {
            provider,
            log_store,
        }
    }

    pub fn generation_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn log_backend(&self) -> &'static str {
        self.log_store.backend()
    }

    /// Relay `message` and shape the outcome for the client.
    pub async fn handle_chat(&self, message: &str) -> ChatResponse {
        let outcome = self.relay(message).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "Chat request failed");
        }
        ChatResponse::from_outcome(outcome)
    }

    /// Generate a reply for `message` and log the exchange.
    ///
    /// Log-store failures are reported here and never change the result.
    pub async fn relay(&self, message: &str) -> Result<String, RelayError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(RelayError::MissingCredential)?;

        let generation = provider.generate(message).await?;

        tracing::info!(
            model = %provider.model(),
            input_tokens = generation.input_tokens,
            output_tokens = generation.output_tokens,
            finish_reason = ?generation.finish_reason,
            "Generated chat response"
        );

        let record = LogRecord::new(message, generation.text.as_str());
        if let Err(e) = self.log_store.append(&record).await {
            tracing::error!(
                backend = self.log_store.backend(),
                error = %e,
                "Error saving chat log"
            );
        }

        Ok(generation.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::log_store::{LogStoreError, NoopLogStore};
    use crate::services::providers::mock::MockTextProvider;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        records: Mutex<Vec<LogRecord>>,
    }

    #[async_trait]
    impl LogStore for RecordingStore {
        async fn append(&self, record: &LogRecord) -> Result<(), LogStoreError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn backend(&self) -> &'static str {
            "recording"
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl LogStore for BrokenStore {
        async fn append(&self, _record: &LogRecord) -> Result<(), LogStoreError> {
            Err(LogStoreError::Network("connection refused".to_string()))
        }

        fn backend(&self) -> &'static str {
            "broken"
        }
    }

    #[tokio::test]
    async fn missing_credential_skips_everything() {
        let store = Arc::new(RecordingStore::default());
        let relay = RelayService::new(None, store.clone());

        let err = relay.relay("hello").await.unwrap_err();

        assert!(matches!(err, RelayError::MissingCredential));
        assert!(store.records.lock().unwrap().is_empty());
        assert!(!relay.generation_configured());
    }

    #[tokio::test]
    async fn success_is_logged() {
        let store = Arc::new(RecordingStore::default());
        let relay = RelayService::new(Some(Arc::new(MockTextProvider::echo())), store.clone());

        let text = relay.relay("hello").await.unwrap();

        assert_eq!(text, "Mock response for: hello");
        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_message, "hello");
        assert_eq!(records[0].ai_response, "Mock response for: hello");
    }

    #[tokio::test]
    async fn provider_failure_is_not_logged() {
        let store = Arc::new(RecordingStore::default());
        let relay = RelayService::new(
            Some(Arc::new(MockTextProvider::failing("quota exceeded"))),
            store.clone(),
        );

        let response = relay.handle_chat("hello").await;

        assert_eq!(response.response, "Error: quota exceeded");
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn log_failure_does_not_change_reply() {
        let relay = RelayService::new(Some(Arc::new(MockTextProvider::echo())), Arc::new(BrokenStore));

        let response = relay.handle_chat("hello").await;

        assert_eq!(response.response, "Mock response for: hello");
    }

    #[tokio::test]
    async fn reports_log_backend() {
        let relay = RelayService::new(None, Arc::new(NoopLogStore));
        assert_eq!(relay.log_backend(), "none");
    }
}
