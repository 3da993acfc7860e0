//! HTTP adapter for article endpoints.
//!
//! - `GET /api/articles` - List own articles (`?blog_id=&status=`)
//! - `POST /api/articles` - Write an article
//! - `POST /api/articles/generate` - AI draft for a keyword
//! - `GET /api/articles/:id` - Article details
//! - `PUT /api/articles/:id` - Revise title, content, status or blog
//! - `DELETE /api/articles/:id` - Delete article

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::article_routes;
