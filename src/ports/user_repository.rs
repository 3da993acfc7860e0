//! User repository port.
//!
//! Accounts are keyed by a database-assigned id. Username and email are both
//! unique; implementations report collisions with `DuplicateUsername` /
//! `DuplicateEmail` carrying the offending value in `details`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, UserAccount};

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateUsername` / `DuplicateEmail` on collisions
    /// - `DatabaseError` on persistence failure
    async fn create(&self, user: NewUser) -> Result<UserAccount, DomainError>;

    /// Persist changes to an existing account.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the account no longer exists
    async fn update(&self, user: &UserAccount) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;

    /// All accounts, newest first.
    async fn list(&self) -> Result<Vec<UserAccount>, DomainError>;

    /// Delete an account together with its blogs and articles.
    ///
    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
