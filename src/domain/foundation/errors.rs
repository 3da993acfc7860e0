//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("Field '{field}' must be at most {max} characters long")]
    TooLong { field: String, max: usize },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a minimum length validation error.
    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
        }
    }

    /// Creates a maximum length validation error.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Checks a trimmed text field against character-count bounds.
///
/// Lengths are counted in `char`s, not bytes.
pub fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(ValidationError::empty_field(field));
    }
    if len < min {
        return Err(ValidationError::too_short(field, min));
    }
    if let Some(max) = max {
        if len > max {
            return Err(ValidationError::too_long(field, max));
        }
    }
    Ok(())
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    UserNotFound,
    BlogNotFound,
    ArticleNotFound,

    // Conflict errors
    DuplicateBlogName,
    DuplicateUsername,
    DuplicateEmail,

    // Authorization errors
    InvalidCredentials,
    Unauthorized,
    Forbidden,

    // AI errors
    AIProviderError,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::BlogNotFound => "BLOG_NOT_FOUND",
            ErrorCode::ArticleNotFound => "ARTICLE_NOT_FOUND",
            ErrorCode::DuplicateBlogName => "DUPLICATE_BLOG_NAME",
            ErrorCode::DuplicateUsername => "DUPLICATE_USERNAME",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::AIProviderError => "AI_PROVIDER_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a database error from any displayable driver error.
    pub fn database(context: &str, err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("{}: {}", context, err))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::validation(err.field().to_string(), err.to_string())
    }
}
