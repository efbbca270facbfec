//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,outrank=debug".to_string()
}
