//! Best-effort chat logging.
//!
//! One backend is chosen at startup and shared read-only by every request.
//! Write failures are reported to the operator by the caller and never reach
//! the chat client.

pub mod firestore;
pub mod mongo;
pub mod noop;

pub use firestore::FirestoreLogStore;
pub use mongo::MongoLogStore;
pub use noop::NoopLogStore;

use crate::config::LogStoreSettings;
use crate::models::LogRecord;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogStoreError {
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store rejected write: {0}")]
    Rejected(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Append-only sink for chat exchanges.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Persist one record. The backend assigns the timestamp.
    async fn append(&self, record: &LogRecord) -> Result<(), LogStoreError>;

    /// Short backend name, reported by `/health`.
    fn backend(&self) -> &'static str;
}

/// Pick the log store for this process.
///
/// A credential file selects Firestore; otherwise a MongoDB URI selects
/// MongoDB; otherwise logging is disabled. Initialisation failures degrade to
/// the no-op store.
pub async fn select_log_store(settings: &LogStoreSettings) -> Arc<dyn LogStore> {
    let timeout = Duration::from_secs(settings.timeout_secs);

    if settings.credentials_path.exists() {
        match FirestoreLogStore::from_credentials_file(
            &settings.credentials_path,
            &settings.firestore_api_base,
            &settings.collection,
            timeout,
        ) {
            Ok(store) => {
                tracing::info!(
                    project_id = %store.project_id(),
                    collection = %settings.collection,
                    "Firestore chat logging initialized"
                );
                return Arc::new(store);
            }
            Err(e) => {
                tracing::warn!(
                    path = %settings.credentials_path.display(),
                    error = %e,
                    "Firestore initialization skipped"
                );
                return Arc::new(NoopLogStore);
            }
        }
    }

    if let Some(uri) = &settings.mongodb_uri {
        match MongoLogStore::connect(
            uri,
            &settings.mongodb_database,
            &settings.collection,
            timeout,
        )
        .await
        {
            Ok(store) => {
                tracing::info!(
                    database = %settings.mongodb_database,
                    collection = %settings.collection,
                    "MongoDB chat logging initialized"
                );
                return Arc::new(store);
            }
            Err(e) => {
                tracing::warn!(error = %e, "MongoDB initialization skipped");
                return Arc::new(NoopLogStore);
            }
        }
    }

    tracing::warn!(
        path = %settings.credentials_path.display(),
        "Firebase service account file not found - running without chat logging"
    );
    Arc::new(NoopLogStore)
}
