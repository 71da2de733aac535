//! TOML-backed settings for the demos.
//!
//! Every key is optional; anything left out falls back to the defaults the
//! walkthroughs were written against.

use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level '{level}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel { level: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        // Fail at load time rather than when the subscriber is installed.
        config.logging.level()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub connect_delay_ms: u64,
    pub disconnect_delay_ms: u64,
    pub query_delay_ms: u64,
}

impl DatabaseConfig {
    /// Same connection string, but every simulated delay set to zero.
    pub fn instant() -> Self {
        Self {
            connect_delay_ms: 0,
            disconnect_delay_ms: 0,
            query_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn disconnect_delay(&self) -> Duration {
        Duration::from_millis(self.disconnect_delay_ms)
    }

    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: "postgresql://localhost:5432/myapp".to_string(),
            connect_delay_ms: 1000,
            disconnect_delay_ms: 500,
            query_delay_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(self.level.trim()).map_err(|_| ConfigError::InvalidLogLevel {
            level: self.level.clone(),
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
