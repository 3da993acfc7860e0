//! Error responses for the REST API.
//!
//! Every failure is rendered as
//!
//! ```json
//! { "code": "BLOG_NOT_FOUND", "message": "Blog not found: 7" }
//! ```
//!
//! with `details` added when a validation error names a field.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::article::ArticleError;
use crate::domain::blog::BlogError;
use crate::domain::drafting::DraftingError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::user::AccountError;

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// An error on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code.to_string(), message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn invalid_field(field: &str, message: String) -> Self {
        let mut err = Self::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed, message);
        if !field.is_empty() {
            err.body = err.body.with_details(serde_json::json!({ "field": field }));
        }
        err
    }

    /// Hides the underlying failure from the client and logs it instead.
    fn internal(code: ErrorCode, message: &str) -> Self {
        tracing::error!(code = %code, "{}", message);
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            "An internal error occurred",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        let status = match &err {
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::DuplicateUsername(_) | AccountError::DuplicateEmail(_) => {
                StatusCode::CONFLICT
            }
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::SelfModification(_) => StatusCode::BAD_REQUEST,
            AccountError::ValidationFailed { field, message } => {
                return Self::invalid_field(field, message.clone())
            }
            AccountError::Infrastructure(msg) => return Self::internal(err.code(), msg),
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        let status = match &err {
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::DuplicateName(_) => StatusCode::CONFLICT,
            BlogError::ValidationFailed { field, message } => {
                return Self::invalid_field(field, message.clone())
            }
            BlogError::Infrastructure(msg) => return Self::internal(err.code(), msg),
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        let status = match &err {
            ArticleError::NotFound(_) | ArticleError::BlogNotFound(_) => StatusCode::NOT_FOUND,
            ArticleError::ValidationFailed { field, message } => {
                return Self::invalid_field(field, message.clone())
            }
            ArticleError::Infrastructure(msg) => return Self::internal(err.code(), msg),
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<DraftingError> for ApiError {
    fn from(err: DraftingError) -> Self {
        let status = match &err {
            DraftingError::BlogNotFound(_) => StatusCode::NOT_FOUND,
            DraftingError::ValidationFailed { field, message } => {
                return Self::invalid_field(field, message.clone())
            }
            DraftingError::Infrastructure(msg) => return Self::internal(err.code(), msg),
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::invalid_field(err.field(), err.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => {
                let field = err.details.get("field").cloned().unwrap_or_default();
                Self::invalid_field(&field, err.message)
            }
            code => Self::internal(code, &err.message),
        }
    }
}
