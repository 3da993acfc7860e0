//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects user into extensions
//! - `RequireAuth` - Extractor that requires authentication
//! - `RequireAdmin` - Extractor that requires the administrator role
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/api/auth/me", get(me))
//!     .layer(middleware::from_fn_with_state(validator.clone(), auth_middleware));
//!
//! async fn me(RequireAuth(user): RequireAuth) -> String {
//!     format!("Hello, {}!", user.username)
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use http::header::AUTHORIZATION;

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// A request without a Bearer token passes through untouched; the route's
/// extractor decides whether that is acceptable. A token that fails
/// validation is rejected here with 401 (503 if the validator is down).
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            let (status, message) = match &e {
                AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Authentication service unavailable",
                    )
                }
                _ => (StatusCode::UNAUTHORIZED, "Authentication failed"),
            };

            (status, Json(ErrorResponse::new("AUTH_ERROR", message))).into_response()
        }
    }
}

/// Extractor that requires authentication.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor that requires an authenticated administrator.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let RequireAuth(user) = RequireAuth::from_request_parts(parts, state).await?;
        if user.require_admin().is_err() {
            tracing::warn!(user_id = %user.id, "Non-admin attempted admin route");
            return Err(AuthRejection::Forbidden);
        }
        Ok(RequireAdmin(user))
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
    /// Authenticated, but not an administrator.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
            AuthRejection::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Administrator access required",
            ),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
