//! HTTP handlers for article endpoints.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::dto::{ArticleListParams, ArticleRequest, ArticleResponse, GenerateRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    CreateArticleCommand, DeleteArticleCommand, GenerateDraftCommand, GetArticleQuery,
    ListArticlesQuery, UpdateArticleCommand,
};
use crate::domain::foundation::{ArticleId, BlogId};

/// GET /api/articles
pub async fn list_articles(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ArticleListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let blog_id = params.blog_id.map(BlogId::new).transpose()?;
    let articles = state
        .list_articles_handler()
        .handle(ListArticlesQuery {
            owner_id: user.id,
            blog_id,
            status: params.status,
        })
        .await?;

    Ok(Json(
        articles.iter().map(ArticleResponse::from).collect::<Vec<_>>(),
    ))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ArticleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .create_article_handler()
        .handle(CreateArticleCommand {
            author_id: user.id,
            blog_id: BlogId::new(request.blog_id)?,
            title: request.title,
            content: request.content,
            status: request.status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ArticleResponse::from(&article))))
}

/// GET /api/articles/:id
pub async fn get_article(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .get_article_handler()
        .handle(GetArticleQuery {
            actor: user,
            article_id: ArticleId::new(id)?,
        })
        .await?;

    Ok(Json(ArticleResponse::from(&article)))
}

/// PUT /api/articles/:id
pub async fn update_article(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
    Json(request): Json<ArticleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state
        .update_article_handler()
        .handle(UpdateArticleCommand {
            actor: user,
            article_id: ArticleId::new(id)?,
            blog_id: BlogId::new(request.blog_id)?,
            title: request.title,
            content: request.content,
            status: request.status,
        })
        .await?;

    Ok(Json(ArticleResponse::from(&article)))
}

/// DELETE /api/articles/:id
pub async fn delete_article(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .delete_article_handler()
        .handle(DeleteArticleCommand {
            actor: user,
            article_id: ArticleId::new(id)?,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/articles/generate
///
/// 200 with a `GenerationResult` whether or not the draft succeeded; only
/// request errors (blank keyword, unknown blog) use error statuses.
pub async fn generate_article(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state
        .generate_draft_handler()
        .handle(GenerateDraftCommand {
            author_id: user.id,
            keyword: request.keyword,
            blog_id: request.blog_id.map(BlogId::new).transpose()?,
        })
        .await?;

    Ok(Json(result))
}
