use serde::{Deserialize, Serialize};

pub const ROOT_MESSAGE: &str = "Backend is working with Gemini API!";

/// Fixed confirmation returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootStatus {
    pub message: String,
}

impl Default for RootStatus {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}

/// Liveness report for `GET /health`. Describes configuration only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub log_store: String,
    pub generation_configured: bool,
}
