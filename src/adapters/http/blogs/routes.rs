//! Axum router configuration for blog endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_blog, delete_blog, get_blog, list_blogs, update_blog};
use crate::adapters::http::state::AppState;

/// Routes mounted under `/api/blogs`.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/:id", get(get_blog).put(update_blog).delete(delete_blog))
}
