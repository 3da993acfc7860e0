//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, identity)
//! - `user` - Accounts and registration rules
//! - `blog` - Blog connection details and the blog aggregate
//! - `article` - Articles and their publication lifecycle
//! - `drafting` - AI draft extraction and failure classification

pub mod article;
pub mod blog;
pub mod drafting;
pub mod foundation;
pub mod user;
