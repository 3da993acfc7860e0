//! User accounts.
//!
//! Registration rules, the account entity, and account errors. Passwords are
//! hashed outside the domain through the `PasswordHasher` port.

mod account;
mod errors;

pub use account::{
    validate_email, validate_password, validate_username, NewUser, Registration, UserAccount,
    MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH,
};
pub use errors::AccountError;
