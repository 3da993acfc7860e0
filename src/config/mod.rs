//! Application configuration
//!
//! Configuration is read from environment variables (and a `.env` file when
//! present) with the `BLOGAPP` prefix. Nested values use double underscores.
//!
//! # Example
//!
//! ```no_run
//! use blogapp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Listening on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use auth::{AuthConfig, MIN_JWT_SECRET_BYTES};
pub use database::{DatabaseConfig, Storage};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Everything the server reads at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (optional PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token signing and admin bootstrap
    #[serde(default)]
    pub auth: AuthConfig,

    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `BLOGAPP__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BLOGAPP__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BLOGAPP")
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
    /// Returns the first `ValidationError` found, section by section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.ai.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
