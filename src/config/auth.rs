//! Authentication configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HS256 signing key length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Authentication configuration (self-issued HS256 tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Signing key for access tokens
    #[serde(default)]
    pub jwt_secret: String,

    /// `iss` claim written to and required on tokens
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Registering with this username grants the administrator role
    pub admin_username: Option<String>,
}

impl AuthConfig {
    /// Get token TTL as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// The minimum key length is enforced in production only.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production
            && self.jwt_secret.len() < MIN_JWT_SECRET_BYTES
        {
            return Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_BYTES));
        }
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        if !(60..=30 * 24 * 3600).contains(&self.token_ttl_secs) {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: default_issuer(),
            token_ttl_secs: default_token_ttl(),
            admin_username: None,
        }
    }
}

fn default_issuer() -> String {
    "blogapp".to_string()
}

fn default_token_ttl() -> u64 {
    24 * 3600
}
