//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least 2 criteria must be configured, got {0}")]
    TooFewCriteria(usize),

    #[error("Criterion at position {0} has an empty key")]
    EmptyCriterionKey(usize),

    #[error("Criterion key '{0}' is configured more than once")]
    DuplicateCriterionKey(String),

    #[error("Log level filter cannot be empty")]
    EmptyLogLevel,
}
