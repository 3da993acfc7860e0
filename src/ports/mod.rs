//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - Accounts
//! - `BlogRepository` - Blogs, unique name per owner
//! - `ArticleRepository` - Articles, filtered listing and status counts
//!
//! ## Authentication Ports
//!
//! - `SessionValidator` - Bearer token to identity
//! - `TokenIssuer` - Identity to Bearer token
//! - `PasswordHasher` - Password hashing and verification
//!
//! ## AI Ports
//!
//! - `TextGenerator` - Single-shot prompt completion

mod ai_provider;
mod article_repository;
mod blog_repository;
mod credentials;
mod session_validator;
mod user_repository;

pub use ai_provider::{AIError, ProviderInfo, TextGenerator};
pub use article_repository::{ArticleFilter, ArticleRepository, StatusCounts};
pub use blog_repository::BlogRepository;
pub use credentials::{IssuedToken, PasswordHasher, TokenIssuer};
pub use session_validator::SessionValidator;
pub use user_repository::UserRepository;
