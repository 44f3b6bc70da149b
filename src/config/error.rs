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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Persistence timeout must be between 1 and 60 seconds")]
    InvalidPersistenceTimeout,

    #[error("UTC offset must be within +/-18 hours, got {0} minutes")]
    InvalidUtcOffset(i32),

    #[error("In-memory result capacity must be at least 1")]
    InvalidMemoryCapacity,

    #[error("Session idle TTL must be at least 1 second")]
    InvalidSessionTtl,

    #[error("Session sweep interval must be between 1 second and the idle TTL")]
    InvalidSweepInterval,

    #[error("Session capacity must be at least 1")]
    InvalidSessionCapacity,

    #[error("Invalid Sheets API base URL")]
    InvalidSheetsUrl,

    #[error("Sheets API base URL must use HTTPS in production")]
    SheetsUrlMustBeHttps,
}
