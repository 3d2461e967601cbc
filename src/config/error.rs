//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_members_per_council must be at least 2, got {0}")]
    MembersLimitTooSmall(usize),

    #[error("max_conclusions_per_council must be at least 1")]
    ConclusionsLimitZero,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
