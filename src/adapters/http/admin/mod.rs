//! HTTP adapter for administrator endpoints.
//!
//! Every route requires `RequireAdmin`:
//! - `GET /api/admin/users` - All accounts
//! - `PATCH /api/admin/users/:id` - Grant or revoke the administrator role
//! - `DELETE /api/admin/users/:id` - Delete an account and its content
//! - `GET /api/admin/blogs?q=` - All blogs, optional search
//! - `DELETE /api/admin/blogs/:id` - Delete any blog
//! - `GET /api/admin/articles?status=&q=` - All articles, optional filters
//! - `DELETE /api/admin/articles/:id` - Delete any article
//! - `GET /api/admin/stats` - Site-wide counts

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::admin_routes;
