//! Top-level router assembly.
//!
//! Mounts each area's routes under `/api` and wraps them in the shared layers:
//! Bearer token validation, request tracing, CORS and a request timeout.

use axum::{middleware, routing::get, Router};
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::admin::admin_routes;
use super::articles::article_routes;
use super::auth::auth_routes;
use super::blogs::blog_routes;
use super::middleware::auth_middleware;
use super::state::AppState;
use crate::config::ServerConfig;

/// Builds the complete API router.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/blogs", blog_routes())
        .nest("/articles", article_routes())
        .nest("/admin", admin_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Permissive when no origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
