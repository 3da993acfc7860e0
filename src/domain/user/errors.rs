//! Account-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | DuplicateUsername | 409 |
//! | DuplicateEmail | 409 |
//! | InvalidCredentials | 401 |
//! | SelfModification | 400 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Account-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Account was not found.
    NotFound(UserId),

    /// Username is taken.
    DuplicateUsername(String),

    /// Email is already registered.
    DuplicateEmail(String),

    /// Unknown username or wrong password. Deliberately indistinguishable.
    InvalidCredentials,

    /// Administrators cannot demote or delete their own account.
    SelfModification(String),

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl AccountError {
    pub fn not_found(id: UserId) -> Self {
        AccountError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::NotFound(_) => ErrorCode::UserNotFound,
            AccountError::DuplicateUsername(_) => ErrorCode::DuplicateUsername,
            AccountError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            AccountError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AccountError::SelfModification(_) => ErrorCode::ValidationFailed,
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AccountError::NotFound(id) => format!("User not found: {}", id),
            AccountError::DuplicateUsername(name) => {
                format!("Username '{}' is already taken", name)
            }
            AccountError::DuplicateEmail(_) => "This email address is already in use".to_string(),
            AccountError::InvalidCredentials => "Invalid username or password".to_string(),
            AccountError::SelfModification(msg) => msg.clone(),
            AccountError::ValidationFailed { message, .. } => message.clone(),
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateUsername => AccountError::DuplicateUsername(
                err.details.get("username").cloned().unwrap_or_default(),
            ),
            ErrorCode::DuplicateEmail => AccountError::DuplicateEmail(
                err.details.get("email").cloned().unwrap_or_default(),
            ),
            ErrorCode::ValidationFailed => AccountError::ValidationFailed {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        let err = AccountError::InvalidCredentials;
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid username or password");
    }

    #[test]
    fn duplicate_codes_survive_domain_error_conversion() {
        let err: AccountError = DomainError::new(ErrorCode::DuplicateEmail, "taken")
            .with_detail("email", "a@b.io")
            .into();
        assert_eq!(err, AccountError::DuplicateEmail("a@b.io".into()));
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: AccountError = ValidationError::too_short("password", 8).into();
        match err {
            AccountError::ValidationFailed { field, .. } => assert_eq!(field, "password"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: AccountError = DomainError::database("insert user", "boom").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
