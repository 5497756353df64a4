//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Minimum cycle length must be at least 1 and not exceed the maximum")]
    InvalidCycleLengthBounds,

    #[error("Default cycle length {0} is outside the accepted bounds")]
    DefaultCycleLengthOutOfBounds(u32),

    #[error("Forecast must cover at least one cycle")]
    ZeroForecastCycles,

    #[error("Default forecast of {cycles} cycles exceeds the maximum of {max}")]
    ForecastCyclesAboveMaximum { cycles: usize, max: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
