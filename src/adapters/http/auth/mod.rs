//! HTTP adapter for account endpoints.
//!
//! - `POST /api/auth/register` - Create an account
//! - `POST /api/auth/login` - Exchange credentials for a Bearer token
//! - `GET /api/auth/me` - Current account

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::auth_routes;
