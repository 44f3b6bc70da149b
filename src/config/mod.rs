//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STYLE_ASSESSMENT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use style_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod persistence;
mod server;
mod sessions;

pub use error::{ConfigError, ValidationError};
pub use persistence::{PersistenceBackend, PersistenceConfig};
pub use server::{Environment, ServerConfig};
pub use sessions::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// development server with in-memory result persistence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Result persistence backend
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Session retention (idle TTL, sweep cadence, capacity)
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STYLE_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STYLE_ASSESSMENT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `STYLE_ASSESSMENT__PERSISTENCE__BACKEND=sheets` -> `persistence.backend = sheets`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STYLE_ASSESSMENT")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.persistence.validate(&self.server.environment)?;
        self.sessions.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
