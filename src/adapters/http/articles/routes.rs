//! Axum router configuration for article endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_article, delete_article, generate_article, get_article, list_articles, update_article,
};
use crate::adapters::http::state::AppState;

/// Routes mounted under `/api/articles`.
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route("/generate", post(generate_article))
        .route(
            "/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}
