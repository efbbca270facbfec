//! Application configuration module
//!
//! This module provides type-safe configuration loading using the `config` and
//! `dotenvy` crates. Values come from an optional `outrank.toml` in the working
//! directory, an optional explicit file, and environment variables with the
//! `OUTRANK` prefix, in increasing order of precedence.
//!
//! # Example
//!
//! ```no_run
//! use outrank::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ranking over {} criteria", config.ranking.criteria.len());
//! ```

mod error;
mod logging;
mod ranking;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use ranking::RankingConfig;

use serde::Deserialize;
use std::path::Path;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Criteria and data source for the ranking run
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `outrank.toml` (if present) and the environment
    ///
    /// # Environment Variable Format
    ///
    /// - `OUTRANK__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `OUTRANK__RANKING__ALTERNATIVES_PATH=...` -> `ranking.alternatives_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value cannot be
    /// parsed into the expected type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `file` between `outrank.toml` and the
    /// environment. The explicit file must exist.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("outrank").required(false));

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("OUTRANK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for fewer than two criteria, blank or
    /// duplicate criterion keys, or an empty log level.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ranking.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
