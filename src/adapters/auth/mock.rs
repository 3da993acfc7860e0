//! Token table standing in for `JwtTokenService` in HTTP tests.
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_test_user("user-token", 1)
//!     .with_test_admin("admin-token", 2);
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Accepts only the tokens it was built with.
#[derive(Debug, Clone, Default)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    failure: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// A regular account named `user{id}`.
    pub fn with_test_user(self, token: impl Into<String>, user_id: i64) -> Self {
        self.with_user(token, identity(user_id, false))
    }

    /// An administrator named `user{id}`.
    pub fn with_test_admin(self, token: impl Into<String>, user_id: i64) -> Self {
        self.with_user(token, identity(user_id, true))
    }

    /// Every validation fails with `error`, registered tokens included.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.failure = Some(error);
        self
    }
}

/// Panics on a non-positive id; test input only.
fn identity(user_id: i64, is_admin: bool) -> AuthenticatedUser {
    let id = UserId::new(user_id).unwrap_or_else(|e| panic!("bad test user id: {}", e));
    AuthenticatedUser::new(
        id,
        format!("user{}", user_id),
        format!("user{}@test.example.com", user_id),
        is_admin,
    )
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.tokens.get(token).cloned().ok_or(AuthError::InvalidToken)
    }
}
