use super::{LogStore, LogStoreError};
use crate::models::LogRecord;
use async_trait::async_trait;

/// Stand-in used when no log store is configured.
pub struct NoopLogStore;

#[async_trait]
impl LogStore for NoopLogStore {
    async fn append(&self, _record: &LogRecord) -> Result<(), LogStoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
