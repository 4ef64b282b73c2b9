//! MongoDB chat log.

use super::{LogStore, LogStoreError};
use crate::models::LogRecord;
use async_trait::async_trait;
use mongodb::{
    bson::DateTime as BsonDateTime, options::ClientOptions, Client as MongoClient, Collection,
};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatLogDocument {
    user_message: String,
    ai_response: String,
    timestamp: BsonDateTime,
}

pub struct MongoLogStore {
    collection: Collection<ChatLogDocument>,
}

impl MongoLogStore {
    /// Create the client. The driver connects lazily, so an unreachable
    /// server surfaces on the first write rather than here, after at most
    /// `timeout`.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self, LogStoreError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB URI: {}", e);
            LogStoreError::Database(e.to_string())
        })?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            LogStoreError::Database(e.to_string())
        })?;

        Ok(Self {
            collection: client.database(database).collection(collection),
        })
    }
}

#[async_trait]
impl LogStore for MongoLogStore {
    async fn append(&self, record: &LogRecord) -> Result<(), LogStoreError> {
        let document = ChatLogDocument {
            user_message: record.user_message.clone(),
            ai_response: record.ai_response.clone(),
            timestamp: BsonDateTime::now(),
        };

        self.collection
            .insert_one(&document, None)
            .await
            .map_err(|e| LogStoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
