//! Authentication adapters.
//!
//! - `jwt` - HS256 access tokens; implements `TokenIssuer` and `SessionValidator`
//! - `password` - Argon2id implementation of `PasswordHasher`
//! - `mock` - Token table for tests that don't sign real JWTs

mod jwt;
mod mock;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::MockSessionValidator;
pub use password::Argon2PasswordHasher;
