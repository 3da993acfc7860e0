//! Bearer token to identity.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns the token from an `Authorization: Bearer` header into the caller.
///
/// The identity is read from the token alone; the admin flag is the one in
/// force when the token was issued. Implementations report
/// `AuthError::TokenExpired` separately from other rejections so clients
/// know to log in again, and `AuthError::ServiceUnavailable` only when they
/// cannot decide at all.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// `token` is the raw value without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
