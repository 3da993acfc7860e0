//! HTTP handlers for blog endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{BlogRequest, BlogResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateBlogCommand, DeleteBlogCommand, GetBlogQuery, ListBlogsQuery, UpdateBlogCommand,
};
use crate::domain::foundation::BlogId;

/// GET /api/blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let blogs = state
        .list_blogs_handler()
        .handle(ListBlogsQuery { owner_id: user.id })
        .await?;

    Ok(Json(blogs.iter().map(BlogResponse::from).collect::<Vec<_>>()))
}

/// POST /api/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<BlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let blog = state
        .create_blog_handler()
        .handle(CreateBlogCommand {
            owner_id: user.id,
            name: request.name,
            url: request.url,
            username: request.username,
            apikey: request.apikey,
            categories: request.categories.into_vec(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BlogResponse::from(&blog))))
}

/// GET /api/blogs/:id
pub async fn get_blog(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let blog = state
        .get_blog_handler()
        .handle(GetBlogQuery {
            actor: user,
            blog_id: BlogId::new(id)?,
        })
        .await?;

    Ok(Json(BlogResponse::from(&blog)))
}

/// PUT /api/blogs/:id
pub async fn update_blog(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Json(request): Json<BlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let blog = state
        .update_blog_handler()
        .handle(UpdateBlogCommand {
            actor: user,
            blog_id: BlogId::new(id)?,
            name: request.name,
            url: request.url,
            username: request.username,
            apikey: request.apikey,
            categories: request.categories.into_vec(),
        })
        .await?;

    Ok(Json(BlogResponse::from(&blog)))
}

/// DELETE /api/blogs/:id
pub async fn delete_blog(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_blog_handler()
        .handle(DeleteBlogCommand {
            actor: user,
            blog_id: BlogId::new(id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
