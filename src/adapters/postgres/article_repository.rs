//! PostgreSQL implementation of ArticleRepository.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{corrupt_row, is_foreign_key_violation, to_count};
use crate::domain::article::{Article, ArticleStatus, ArticleText, NewArticle};
use crate::domain::foundation::{
    ArticleId, BlogId, DomainError, ErrorCode, OwnedByUser, Timestamp, UserId,
};
use crate::ports::{ArticleFilter, ArticleRepository, StatusCounts};

const ARTICLE_COLUMNS: &str =
    "id, owner_id, blog_id, title, content, status, published_at, created_at, updated_at";

pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    owner_id: i64,
    blog_id: i64,
    title: String,
    content: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = ArticleId::new(row.id).map_err(|e| corrupt_row("article id", e))?;
        let owner_id = UserId::new(row.owner_id).map_err(|e| corrupt_row("owner id", e))?;
        let blog_id = BlogId::new(row.blog_id).map_err(|e| corrupt_row("blog id", e))?;
        let status = ArticleStatus::from_str(&row.status).map_err(|e| corrupt_row("status", e))?;

        Ok(Article::reconstitute(
            id,
            NewArticle {
                owner_id,
                blog_id,
                text: ArticleText {
                    title: row.title,
                    content: row.content,
                },
                status,
                published_at: row.published_at.map(Timestamp::from_datetime),
            },
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

fn map_write_error(err: sqlx::Error, blog_id: BlogId, context: &str) -> DomainError {
    if is_foreign_key_violation(&err) {
        return DomainError::new(ErrorCode::BlogNotFound, "Blog not found")
            .with_detail("blog_id", blog_id.to_string());
    }
    DomainError::database(context, err)
}

/// Appends the filter's WHERE clause to `builder`.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
    builder.push(" WHERE TRUE");
    if let Some(owner_id) = filter.owner_id {
        builder.push(" AND owner_id = ").push_bind(owner_id.as_i64());
    }
    if let Some(blog_id) = filter.blog_id {
        builder.push(" AND blog_id = ").push_bind(blog_id.as_i64());
    }
    if let Some(status) = filter.status {
        builder.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        builder
            .push(" AND (POSITION(")
            .push_bind(query.clone())
            .push(" IN LOWER(title)) > 0 OR POSITION(")
            .push_bind(query)
            .push(" IN LOWER(content)) > 0)");
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn create(&self, article: NewArticle) -> Result<Article, DomainError> {
        let row: ArticleRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO articles (owner_id, blog_id, title, content, status, published_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        ))
        .bind(article.owner_id.as_i64())
        .bind(article.blog_id.as_i64())
        .bind(&article.text.title)
        .bind(&article.text.content)
        .bind(article.status.as_str())
        .bind(article.published_at.as_ref().map(|t| *t.as_datetime()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, article.blog_id, "Failed to create article"))?;

        row.try_into()
    }

    async fn update(&self, article: &Article) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE articles SET
                blog_id = $2,
                title = $3,
                content = $4,
                status = $5,
                published_at = $6,
                updated_at = $7
            WHERE id = $1 AND owner_id = $8
            "#,
        )
        .bind(article.id().as_i64())
        .bind(article.blog_id().as_i64())
        .bind(article.title())
        .bind(article.content())
        .bind(article.status().as_str())
        .bind(article.published_at().map(|t| *t.as_datetime()))
        .bind(article.updated_at().as_datetime())
        .bind(article.owner_id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, article.blog_id(), "Failed to update article"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ArticleNotFound,
                "Article not found",
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, DomainError> {
        let row: Option<ArticleRow> = sqlx::query_as(&format!(
            "SELECT {} FROM articles WHERE id = $1",
            ARTICLE_COLUMNS
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch article", e))?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DomainError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM articles", ARTICLE_COLUMNS));
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY id DESC");

        let rows: Vec<ArticleRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list articles", e))?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete article", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_status(&self) -> Result<StatusCounts, DomainError> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM articles GROUP BY status")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to count articles", e))?;

        let mut counts = StatusCounts::default();
        for (status, count) in rows {
            let status = ArticleStatus::from_str(&status).map_err(|e| corrupt_row("status", e))?;
            counts.add(status, to_count(count));
        }
        Ok(counts)
    }
}
