//! HS256 JWT adapter for issuing and validating access tokens.
//!
//! Implements both `TokenIssuer` and `SessionValidator` with one shared
//! signing key, so every token this service issues is accepted by it until
//! it expires.
//!
//! # Security
//!
//! Validation checks:
//! - **Signature**: HS256 with the configured secret
//! - **Issuer (iss)**: Must match the configured issuer
//! - **Expiry (exp)**: Must be in the future, no leeway
//!
//! # Example
//!
//! ```ignore
//! use blogapp::adapters::auth::{JwtConfig, JwtTokenService};
//! use blogapp::ports::{SessionValidator, TokenIssuer};
//!
//! let service = JwtTokenService::new(JwtConfig::new(secret, "blogapp"));
//! let token = service.issue(&account.identity())?;
//! let user = service.validate(&token.access_token).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AuthError, AuthenticatedUser, DomainError, ErrorCode, Timestamp, UserId,
};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Configuration for the JWT service.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: Secret<String>,

    /// Value written to and required in the `iss` claim.
    pub issuer: String,

    /// Token lifetime. Defaults to 24 hours.
    pub ttl: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: Secret::new(secret.into()),
            issuer: issuer.into(),
            ttl: Duration::from_secs(86_400),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Claims carried by our access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    /// Subject - the numeric user ID as a string
    sub: String,

    /// Issuer
    iss: String,

    /// Expiry timestamp (Unix epoch seconds)
    exp: i64,

    /// Issued at timestamp
    iat: i64,

    username: String,

    email: String,

    #[serde(default)]
    is_admin: bool,
}

/// Issues and validates HS256 access tokens.
pub struct JwtTokenService {
    issuer: String,
    ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.issuer,
            ttl: config.ttl,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, DomainError> {
        let now = Timestamp::now().as_datetime().timestamp();
        let ttl = self.ttl.as_secs();
        let claims = AccessClaims {
            sub: user.id.to_string(),
            iss: self.issuer.clone(),
            exp: now + ttl as i64,
            iat: now,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {}", e);
                DomainError::new(ErrorCode::InternalError, "Failed to issue access token")
            })?;

        Ok(IssuedToken::bearer(token, ttl))
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::debug!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?;
        let claims = data.claims;

        let user_id = claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| {
                tracing::warn!("Invalid user ID in token: {}", claims.sub);
                AuthError::InvalidToken
            })?;

        Ok(AuthenticatedUser::new(
            user_id,
            claims.username,
            claims.email,
            claims.is_admin,
        ))
    }
}
