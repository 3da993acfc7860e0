//! Configuration errors

use thiserror::Error;

/// Environment variables could not be read into `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// A loaded value that the server cannot run with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least {0} bytes")]
    JwtSecretTooShort(usize),

    #[error("Token TTL must be between 60 seconds and 30 days")]
    InvalidTokenTtl,

    #[error("Invalid AI base URL")]
    InvalidAiBaseUrl,

    #[error("AI base URL must use HTTPS in production")]
    AiBaseUrlMustBeHttps,
}
