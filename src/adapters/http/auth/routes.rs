//! Axum router configuration for account endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, me, register};
use crate::adapters::http::state::AppState;

/// Routes mounted under `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}
