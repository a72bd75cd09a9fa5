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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("Invalid AI request timeout")]
    InvalidAiTimeout,

    #[error("Question generation timeout must be positive")]
    InvalidGenerationTimeout,

    #[error("Request timeout ({request_secs}s) must exceed the generation timeout ({generation_secs}s)")]
    RequestTimeoutTooShort { request_secs: u64, generation_secs: u64 },

    #[error("At most {max} AI retries are allowed, got {got}")]
    TooManyRetries { got: u32, max: u32 },

    #[error("Session retention and sweep interval must be positive")]
    InvalidSessionRetention,
}
