use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query::QueryConfig;
use crate::QueryType;

const LOCAL_CONFIG_FILE: &str = "dnsclient.toml";

/// Upper bound on retransmissions accepted from configuration.
const MAX_RETRIES_LIMIT: u32 = 255;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ClientConfig {
    /// Per-query settings (timeout, retries, port, record type)
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsclient.toml in current directory
    /// 3. Default configuration
    ///
    /// Command-line overrides are applied last and the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_FILE).exists() {
            Self::from_file(LOCAL_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.timeout_secs {
            self.query.timeout_secs = timeout;
        }
        if let Some(retries) = overrides.max_retries {
            self.query.max_retries = retries;
        }
        if let Some(port) = overrides.port {
            self.query.port = port;
        }
        if let Some(record_type) = overrides.record_type {
            self.query.record_type = record_type;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Timeout must be at least 1 second".to_string(),
            ));
        }
        if self.query.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }
        if self.query.max_retries > MAX_RETRIES_LIMIT {
            return Err(ConfigError::Validation(format!(
                "Max retries cannot exceed {}",
                MAX_RETRIES_LIMIT
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub port: Option<u16>,
    pub record_type: Option<QueryType>,
    pub log_level: Option<String>,
}
