//! Axum router configuration for administrator endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{
    delete_article, delete_blog, delete_user, list_users, search_articles, search_blogs,
    set_user_role, stats,
};
use crate::adapters::http::state::AppState;

/// Routes mounted under `/api/admin`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user).patch(set_user_role))
        .route("/blogs", get(search_blogs))
        .route("/blogs/:id", delete(delete_blog))
        .route("/articles", get(search_articles))
        .route("/articles/:id", delete(delete_article))
        .route("/stats", get(stats))
}
