//! Request types for administrator endpoints.
//!
//! Responses reuse the account, blog and article DTOs.

use serde::Deserialize;

use crate::domain::article::ArticleStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogSearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleSearchParams {
    pub status: Option<ArticleStatus>,
    pub q: Option<String>,
}
