//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Gemini text generation (plus a scripted mock)
//! - `auth` - JWT sessions and Argon2 password hashing
//! - `http` - axum REST API
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
