//! HTTP handlers for account endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetAccountQuery, LoginUserCommand, RegisterUserCommand};

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .register_user_handler()
        .handle(RegisterUserCommand {
            username: request.username,
            email: request.email,
            password: request.password,
            password_confirmation: request.password_confirmation,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&account))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .login_user_handler()
        .handle(LoginUserCommand {
            username: request.username,
            password: request.password,
        })
        .await?;

    Ok(Json(LoginResponse::from(result)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .get_account_handler()
        .handle(GetAccountQuery { user_id: user.id })
        .await?;

    Ok(Json(UserResponse::from(&account)))
}
