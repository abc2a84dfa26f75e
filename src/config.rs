//! # Configuration
//!
//! Application configuration loading and management.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier):
//! 1. Default values
//! 2. Configuration file (TOML, if supplied)
//! 3. Environment variables (prefixed with `STOCK_REGISTRY_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `STOCK_REGISTRY_DATABASE_URL` | PostgreSQL connection URL | `postgres://localhost:5432/stocks` |
//! | `STOCK_REGISTRY_DATABASE_MAX_CONNECTIONS` | Connection pool size | `5` |
//! | `STOCK_REGISTRY_DATABASE_ACQUIRE_TIMEOUT_SECS` | Pool acquire timeout | `5` |
//!
//! # Examples
//!
//! ```
//! use stock_registry::config::AppConfig;
//!
//! let config = AppConfig::load().unwrap();
//! assert!(config.database.max_connections > 0);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// Database connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Timeout in seconds when acquiring a connection from the pool.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_database_url() -> String {
    "postgres://localhost:5432/stocks".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_acquire_timeout_secs() -> u64 {
    5
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads configuration from defaults overridden by environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment override cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if
    /// an environment override is invalid.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("STOCK_REGISTRY_DATABASE_URL") {
            self.database.url = url;
        }

        if let Ok(raw) = std::env::var("STOCK_REGISTRY_DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "database.max_connections".to_string(),
                    message: format!("expected a positive integer, got '{raw}'"),
                })?;
        }

        if let Ok(raw) = std::env::var("STOCK_REGISTRY_DATABASE_ACQUIRE_TIMEOUT_SECS") {
            self.database.acquire_timeout_secs =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    field: "database.acquire_timeout_secs".to_string(),
                    message: format!("expected a positive integer, got '{raw}'"),
                })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "database.max_connections".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
