use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CREDENTIALS_PATH: &str = "firebase-service-account.json";
pub const DEFAULT_FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_LOG_STORE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MONGODB_DATABASE: &str = "relay_db";
pub const DEFAULT_LOG_COLLECTION: &str = "chats";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3002";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub gemini: GeminiSettings,
    pub log_store: LogStoreSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    /// `None` puts the relay in error-response mode; it is never a startup failure.
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LogStoreSettings {
    /// Firestore service-account file, resolved against the working directory.
    pub credentials_path: PathBuf,
    pub firestore_api_base: String,
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    pub collection: String,
    /// Upper bound on each request a log store makes.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl RelayConfig {
    /// Load from `configuration.*`, `APP__*` and the process environment.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let secs = |key: &str, default: u64| -> Result<u64, AppError> {
            match get(key) {
                Some(raw) => raw.trim().parse().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "{} must be a whole number of seconds, got '{}': {}",
                        key,
                        raw,
                        e
                    ))
                }),
                None => Ok(default),
            }
        };
        let timeout_secs = secs("GEMINI_TIMEOUT_SECS", DEFAULT_GEMINI_TIMEOUT_SECS)?;
        let log_store_timeout_secs =
            secs("LOG_STORE_TIMEOUT_SECS", DEFAULT_LOG_STORE_TIMEOUT_SECS)?;

        let allowed_origins = get_or("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(RelayConfig {
            common,
            log_level: get_or("LOG_LEVEL", "info"),
            otlp_endpoint: get("OTLP_ENDPOINT"),
            gemini: GeminiSettings {
                api_key: get("GEMINI_API_KEY").map(Secret::new),
                model: get_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                api_base: get_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                timeout_secs,
            },
            log_store: LogStoreSettings {
                credentials_path: PathBuf::from(get_or(
                    "FIREBASE_CREDENTIALS_PATH",
                    DEFAULT_CREDENTIALS_PATH,
                )),
                firestore_api_base: get_or("FIRESTORE_API_BASE", DEFAULT_FIRESTORE_API_BASE),
                mongodb_uri: get("MONGODB_URI"),
                mongodb_database: get_or("MONGODB_DATABASE", DEFAULT_MONGODB_DATABASE),
                collection: get_or("LOG_COLLECTION", DEFAULT_LOG_COLLECTION),
                timeout_secs: log_store_timeout_secs,
            },
            cors: CorsSettings { allowed_origins },
        })
    }
}
