//! Shared helpers for relay-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use relay_service::config::RelayConfig;
use relay_service::models::LogRecord;
use relay_service::services::providers::TextProvider;
use relay_service::services::{LogStore, LogStoreError, RelayService};
use relay_service::AppState;
use service_core::config::Config;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Test RSA private key used to sign service-account assertions.
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_rsa_key.pem");

/// Build a config from explicit variables only; the process environment is ignored.
pub fn config_with(vars: &[(&str, &str)]) -> RelayConfig {
    let mut vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.entry("FIREBASE_CREDENTIALS_PATH".to_string())
        .or_insert_with(|| missing_path().display().to_string());

    RelayConfig::from_lookup(Config { port: 0 }, |key| vars.get(key).cloned())
        .expect("Failed to build test config")
}

/// A credential path guaranteed not to exist.
pub fn missing_path() -> PathBuf {
    std::env::temp_dir().join(format!("relay-missing-{}.json", uuid::Uuid::new_v4()))
}

pub fn state_with(provider: Option<Arc<dyn TextProvider>>, log_store: Arc<dyn LogStore>) -> AppState {
    AppState {
        config: config_with(&[]),
        relay: RelayService::new(provider, log_store),
    }
}

/// Log store that remembers every record it is given.
#[derive(Default)]
pub struct RecordingLogStore {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogStore {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogStore for RecordingLogStore {
    async fn append(&self, record: &LogRecord) -> Result<(), LogStoreError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}

/// Log store whose every write fails.
pub struct FailingLogStore;

#[async_trait]
impl LogStore for FailingLogStore {
    async fn append(&self, _record: &LogRecord) -> Result<(), LogStoreError> {
        Err(LogStoreError::Rejected("simulated outage".to_string()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// Write a service-account key file pointing its token endpoint at `token_uri`.
pub fn write_service_account(token_uri: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("relay-sa-{}.json", uuid::Uuid::new_v4()));
    let key = serde_json::json!({
        "type": "service_account",
        "project_id": "demo-project",
        "private_key_id": "test-key-id",
        "private_key": TEST_PRIVATE_KEY,
        "client_email": "relay@demo-project.iam.gserviceaccount.com",
        "token_uri": token_uri,
    });
    std::fs::write(&path, key.to_string()).expect("Failed to write service account file");
    path
}
