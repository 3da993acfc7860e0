//! HTTP handlers for administrator endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{ArticleSearchParams, BlogSearchParams, SetRoleRequest};
use crate::adapters::http::articles::dto::AdminArticleResponse;
use crate::adapters::http::auth::dto::UserResponse;
use crate::adapters::http::blogs::dto::AdminBlogResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAdmin;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    DeleteArticleCommand, DeleteBlogCommand, DeleteUserCommand, SearchArticlesQuery,
    SearchBlogsQuery, SetUserRoleCommand,
};
use crate::domain::foundation::{ArticleId, BlogId, UserId};

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.list_users_handler().handle().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect::<Vec<_>>()))
}

/// PATCH /api/admin/users/:id
pub async fn set_user_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i64>,
    Json(request): Json<SetRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .set_user_role_handler()
        .handle(SetUserRoleCommand {
            actor: admin,
            user_id: UserId::new(id)?,
            is_admin: request.is_admin,
        })
        .await?;

    Ok(Json(UserResponse::from(&account)))
}

/// DELETE /api/admin/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_user_handler()
        .handle(DeleteUserCommand {
            actor: admin,
            user_id: UserId::new(id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/blogs
pub async fn search_blogs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<BlogSearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let blogs = state
        .search_blogs_handler()
        .handle(SearchBlogsQuery { query: params.q })
        .await?;

    Ok(Json(blogs.iter().map(AdminBlogResponse::from).collect::<Vec<_>>()))
}

/// DELETE /api/admin/blogs/:id
pub async fn delete_blog(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_blog_handler()
        .handle(DeleteBlogCommand {
            actor: admin,
            blog_id: BlogId::new(id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/articles
pub async fn search_articles(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ArticleSearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let articles = state
        .search_articles_handler()
        .handle(SearchArticlesQuery {
            status: params.status,
            query: params.q,
        })
        .await?;

    Ok(Json(
        articles
            .iter()
            .map(AdminArticleResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// DELETE /api/admin/articles/:id
pub async fn delete_article(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_article_handler()
        .handle(DeleteArticleCommand {
            actor: admin,
            article_id: ArticleId::new(id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.stats_handler().handle().await?))
}
