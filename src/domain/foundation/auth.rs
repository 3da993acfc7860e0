//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is what the HTTP layer hands to handlers after a Bearer
//! token has been validated through the `SessionValidator` port. It carries the
//! claims we actually use, including the admin flag that gates the admin
//! routes.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The account identifier.
    pub id: UserId,

    /// Login name.
    pub username: String,

    /// Email address recorded at registration.
    pub email: String,

    /// Whether the account holds the administrator role.
    pub is_admin: bool,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        is_admin: bool,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            is_admin,
        }
    }

    /// Fails with `InsufficientPermissions` unless the user is an administrator.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Malformed, wrongly signed, or issued by someone else.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Well formed and correctly signed, but past `exp`.
    #[error("Token expired")]
    TokenExpired,

    /// Not an administrator.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// The validator could not decide.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}
