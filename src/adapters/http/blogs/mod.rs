//! HTTP adapter for blog endpoints.
//!
//! All routes are scoped to the caller's own blogs:
//! - `GET /api/blogs` - List own blogs, newest first
//! - `POST /api/blogs` - Register a blog
//! - `GET /api/blogs/:id` - Blog details
//! - `PUT /api/blogs/:id` - Replace connection details
//! - `DELETE /api/blogs/:id` - Delete blog and its articles

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::blog_routes;
