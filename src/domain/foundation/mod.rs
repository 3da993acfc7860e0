//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the blog administration domain.

mod auth;
mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{check_length, DomainError, ErrorCode, ValidationError};
pub use ids::{ArticleId, BlogId, UserId};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;
