//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes:
//! - `auth` - Registration, login, current account
//! - `blogs` - The caller's blogs
//! - `articles` - The caller's articles and AI draft generation
//! - `admin` - Site-wide moderation and statistics

pub mod admin;
pub mod articles;
pub mod auth;
pub mod blogs;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use state::AppState;
