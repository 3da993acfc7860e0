//! Article-specific error types.

use crate::domain::foundation::{ArticleId, BlogId, DomainError, ErrorCode, ValidationError};

/// Article-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    /// Article does not exist or is not visible to the caller.
    NotFound(ArticleId),

    /// The target blog does not exist or belongs to someone else.
    BlogNotFound(BlogId),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl ArticleError {
    pub fn not_found(id: ArticleId) -> Self {
        ArticleError::NotFound(id)
    }

    pub fn blog_not_found(id: BlogId) -> Self {
        ArticleError::BlogNotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ArticleError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ArticleError::NotFound(_) => ErrorCode::ArticleNotFound,
            ArticleError::BlogNotFound(_) => ErrorCode::BlogNotFound,
            ArticleError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ArticleError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ArticleError::NotFound(id) => format!("Article not found: {}", id),
            ArticleError::BlogNotFound(id) => format!("Blog not found: {}", id),
            ArticleError::ValidationFailed { message, .. } => message.clone(),
            ArticleError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ArticleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ArticleError {}

impl From<ValidationError> for ArticleError {
    fn from(err: ValidationError) -> Self {
        ArticleError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ArticleError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ArticleError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => ArticleError::Infrastructure(err.to_string()),
        }
    }
}
