//! Credential ports: password hashing and access token issuing.
//!
//! Both are synchronous; hashing is CPU-bound and callers that care move it
//! onto a blocking thread.

use serde::Serialize;

use crate::domain::foundation::{AuthenticatedUser, DomainError};

/// Hashes and verifies account passwords.
pub trait PasswordHasher: Send + Sync {
    /// Returns a self-describing hash string (salt included).
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// `Ok(false)` for a wrong password; `Err` only for an unreadable hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

/// A freshly issued access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

impl IssuedToken {
    pub fn bearer(access_token: impl Into<String>, expires_in: u64) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "Bearer",
            expires_in,
        }
    }
}

/// Issues access tokens that a `SessionValidator` will later accept.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken, DomainError>;
}
