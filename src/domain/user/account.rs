//! User account entity and registration rules.

use crate::domain::foundation::{
    check_length, AuthenticatedUser, Timestamp, UserId, ValidationError,
};

/// Minimum username length for registration and login.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Minimum password length for registration and login.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum email length.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Validates a username: 3+ characters, letters and digits only.
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let username = username.trim();
    check_length(
        "username",
        username,
        MIN_USERNAME_LENGTH,
        Some(MAX_USERNAME_LENGTH),
    )?;
    if !username.chars().all(char::is_alphanumeric) {
        return Err(ValidationError::invalid_format(
            "username",
            "must contain only letters and numbers",
        ));
    }
    Ok(username.to_string())
}

/// Validates an email address: `local@domain`, no whitespace.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    check_length("email", email, 1, Some(MAX_EMAIL_LENGTH))?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::invalid_format(
            "email",
            "enter a valid email address",
        ));
    }
    Ok(email.to_string())
}

/// Validates a password and its confirmation.
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::empty_field("password"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::too_short("password", MIN_PASSWORD_LENGTH));
    }
    if password != confirmation {
        return Err(ValidationError::invalid_format(
            "password_confirmation",
            "passwords do not match",
        ));
    }
    Ok(())
}

/// A validated registration form, before the password is hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// Validates all registration fields.
    ///
    /// # Errors
    ///
    /// The first failing field, checked in form order.
    pub fn new(
        username: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Self, ValidationError> {
        let username = validate_username(username)?;
        let email = validate_email(email)?;
        validate_password(password, password_confirmation)?;
        Ok(Self {
            username,
            email,
            password: password.to_string(),
        })
    }
}

/// Account data ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// A registered user.
///
/// # Invariants
///
/// - `username` and `email` are unique across accounts
/// - `password_hash` is a PHC-format hash, never the plain password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    id: UserId,
    username: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserAccount {
    /// Reconstitute an account from persistence.
    pub fn reconstitute(
        id: UserId,
        new_user: NewUser,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_admin: new_user.is_admin,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Grants or revokes the administrator role.
    pub fn set_admin(&mut self, is_admin: bool) {
        if self.is_admin != is_admin {
            self.is_admin = is_admin;
            self.updated_at = Timestamp::now();
        }
    }

    /// The identity carried in issued tokens.
    pub fn identity(&self) -> AuthenticatedUser {
        AuthenticatedUser::new(self.id, &self.username, &self.email, self.is_admin)
    }
}
