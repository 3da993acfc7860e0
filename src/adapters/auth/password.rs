//! Argon2id password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PasswordHasher;

/// `PasswordHasher` backed by Argon2id with the crate's default parameters.
///
/// Hashes are PHC strings, so the salt and parameters travel with the hash.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("Password hashing failed: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Invalid password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_only_the_right_password() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse battery", &hash).unwrap());
        assert!(!hasher.verify("wrong horse battery", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let hasher = Argon2PasswordHasher::new();

        assert_ne!(hasher.hash("password123").unwrap(), hasher.hash("password123").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let result = Argon2PasswordHasher::new().verify("password123", "not-a-phc-string");

        assert!(result.is_err());
    }
}
