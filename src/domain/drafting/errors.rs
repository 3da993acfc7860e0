//! Drafting request errors.
//!
//! Upstream generation failures are not errors here: they become a failed
//! `GenerationResult`. Only a bad request or a missing blog is rejected.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | BlogNotFound | 404 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{BlogId, DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftingError {
    /// Keyword missing or too long.
    ValidationFailed { field: String, message: String },

    /// The blog supplying category hints is missing or not the caller's.
    BlogNotFound(BlogId),

    /// Blog lookup failed.
    Infrastructure(String),
}

impl DraftingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DraftingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DraftingError::BlogNotFound(_) => ErrorCode::BlogNotFound,
            DraftingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DraftingError::ValidationFailed { message, .. } => message.clone(),
            DraftingError::BlogNotFound(id) => format!("Blog not found: {}", id),
            DraftingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DraftingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DraftingError {}

impl From<ValidationError> for DraftingError {
    fn from(err: ValidationError) -> Self {
        DraftingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DraftingError {
    fn from(err: DomainError) -> Self {
        DraftingError::Infrastructure(err.to_string())
    }
}
