//! LoginUserHandler - Exchanges username and password for an access token.
//!
//! Unknown usernames and wrong passwords produce the same error, and both
//! paths run one password verification so response time does not reveal
//! which accounts exist.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::domain::foundation::check_length;
use crate::domain::user::{AccountError, UserAccount, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use crate::ports::{IssuedToken, PasswordHasher, TokenIssuer, UserRepository};

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginUserResult {
    pub token: IssuedToken,
    pub account: UserAccount,
}

/// Handler for login.
pub struct LoginUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    /// Hash verified against when the username is unknown.
    dummy_hash: OnceCell<String>,
}

impl LoginUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            dummy_hash: OnceCell::new(),
        }
    }

    pub async fn handle(&self, cmd: LoginUserCommand) -> Result<LoginUserResult, AccountError> {
        let username = cmd.username.trim();
        check_length("username", username, MIN_USERNAME_LENGTH, None)?;
        check_length("password", &cmd.password, MIN_PASSWORD_LENGTH, None)?;

        let account = self.users.find_by_username(username).await?;

        let stored_hash = match &account {
            Some(account) => account.password_hash().to_string(),
            None => self
                .dummy_hash
                .get_or_try_init(|| self.hasher.hash("not-a-real-password"))?
                .clone(),
        };

        let hasher = Arc::clone(&self.hasher);
        let password = cmd.password;
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| AccountError::infrastructure(format!("hashing task failed: {}", e)))??;

        let account = match account {
            Some(account) if verified => account,
            _ => {
                warn!(username = %username, "Failed login attempt");
                return Err(AccountError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(&account.identity())?;

        info!(user_id = %account.id(), "User logged in");

        Ok(LoginUserResult { token, account })
    }
}
