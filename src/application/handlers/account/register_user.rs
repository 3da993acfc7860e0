//! RegisterUserHandler - Command handler for creating accounts.

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{AccountError, NewUser, Registration, UserAccount};
use crate::ports::{PasswordHasher, UserRepository};

/// Command to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Handler for registration.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    /// Registering with this username grants the administrator role.
    admin_username: Option<String>,
}

impl RegisterUserHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        admin_username: Option<String>,
    ) -> Self {
        Self {
            users,
            hasher,
            admin_username,
        }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserAccount, AccountError> {
        let registration = Registration::new(
            &cmd.username,
            &cmd.email,
            &cmd.password,
            &cmd.password_confirmation,
        )?;

        if self
            .users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateUsername(registration.username));
        }

        let hasher = Arc::clone(&self.hasher);
        let password = registration.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AccountError::infrastructure(format!("hashing task failed: {}", e)))??;

        let is_admin = self
            .admin_username
            .as_deref()
            .is_some_and(|admin| admin == registration.username);

        let account = self
            .users
            .create(NewUser {
                username: registration.username,
                email: registration.email,
                password_hash,
                is_admin,
            })
            .await?;

        info!(
            user_id = %account.id(),
            username = %account.username(),
            is_admin = account.is_admin(),
            "User registered"
        );

        Ok(account)
    }
}
