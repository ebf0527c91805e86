//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CHOUETTE` prefix and
//! nested values are separated by double underscores. Every value has a
//! default, so an empty environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use chouette_scoreboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Session file: {}", config.storage.session_path().display());
//! ```

mod error;
mod logging;
mod scoring;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Session and roster file locations
    #[serde(default)]
    pub storage: StorageConfig,

    /// Scoring policy
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHOUETTE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `CHOUETTE__STORAGE__DATA_DIR=/var/lib/chouette` -> `storage.data_dir`
    /// - `CHOUETTE__SCORING__POLICY=zero_sum` -> `scoring.policy`
    /// - `CHOUETTE__LOGGING__JSON=true` -> `logging.json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHOUETTE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
