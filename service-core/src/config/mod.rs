use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings shared by every binary in the workspace.
///
/// Sources, lowest priority first: an optional `configuration.{toml,yaml,json}`
/// file in the working directory, then `APP__`-prefixed environment variables
/// (for example `APP__PORT=9000`). A `.env` file is loaded before either.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_matches_frontend_expectation() {
        assert_eq!(Config::default().port, 8000);
    }

    #[test]
    fn deserializes_port_from_source() {
        let cfg = Cfg::builder()
            .set_override("port", 9100)
            .unwrap()
            .build()
            .unwrap();
        let config: Config = cfg.try_deserialize().unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn missing_port_falls_back_to_default() {
        let cfg = Cfg::builder().build().unwrap();
        let config: Config = cfg.try_deserialize().unwrap();
        assert_eq!(config.port, 8000);
    }
}
