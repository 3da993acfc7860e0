//! Blog-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | DuplicateName | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{BlogId, DomainError, ErrorCode, ValidationError};

/// Blog-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    /// Blog does not exist or is not visible to the caller.
    NotFound(BlogId),

    /// The owner already has a blog with this name.
    DuplicateName(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl BlogError {
    pub fn not_found(id: BlogId) -> Self {
        BlogError::NotFound(id)
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        BlogError::DuplicateName(name.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BlogError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BlogError::NotFound(_) => ErrorCode::BlogNotFound,
            BlogError::DuplicateName(_) => ErrorCode::DuplicateBlogName,
            BlogError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BlogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BlogError::NotFound(id) => format!("Blog not found: {}", id),
            BlogError::DuplicateName(name) => {
                format!("You already have a blog named '{}'", name)
            }
            BlogError::ValidationFailed { message, .. } => message.clone(),
            BlogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BlogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BlogError {}

impl From<ValidationError> for BlogError {
    fn from(err: ValidationError) -> Self {
        BlogError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for BlogError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateBlogName => {
                BlogError::DuplicateName(err.details.get("name").cloned().unwrap_or_default())
            }
            ErrorCode::ValidationFailed => BlogError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => BlogError::Infrastructure(err.to_string()),
        }
    }
}
