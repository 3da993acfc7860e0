//! GetAccountHandler - Query handler for the caller's own account.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{AccountError, UserAccount};
use crate::ports::UserRepository;

/// Query for one account.
#[derive(Debug, Clone)]
pub struct GetAccountQuery {
    pub user_id: UserId,
}

pub struct GetAccountHandler {
    users: Arc<dyn UserRepository>,
}

impl GetAccountHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// A token can outlive its account; that case is `NotFound`.
    pub async fn handle(&self, query: GetAccountQuery) -> Result<UserAccount, AccountError> {
        self.users
            .find_by_id(query.user_id)
            .await?
            .ok_or(AccountError::NotFound(query.user_id))
    }
}
