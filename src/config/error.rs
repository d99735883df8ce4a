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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown similarity measure: {0}")]
    UnknownMeasure(String),

    #[error("Component index {0} is outside [0, 3]")]
    InvalidComponent(i64),

    #[error("Invalid cost index: {0}")]
    InvalidCostIndex(String),

    #[error("Sample dimension must be positive: {0}")]
    EmptySampleDimension(&'static str),
}
