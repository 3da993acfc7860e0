//! Request and response types for account endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::LoginUserResult;
use crate::domain::user::UserAccount;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// An account as shown to its owner and to administrators.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: String,
}

impl From<&UserAccount> for UserResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id().as_i64(),
            username: account.username().to_string(),
            email: account.email().to_string(),
            is_admin: account.is_admin(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
    pub user: UserResponse,
}

impl From<LoginUserResult> for LoginResponse {
    fn from(result: LoginUserResult) -> Self {
        Self {
            access_token: result.token.access_token,
            token_type: result.token.token_type,
            expires_in: result.token.expires_in,
            user: UserResponse::from(&result.account),
        }
    }
}
