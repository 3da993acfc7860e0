//! PostgreSQL implementation of BlogRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{corrupt_row, to_count, violated_constraint};
use crate::domain::blog::{Blog, BlogDetails};
use crate::domain::foundation::{BlogId, DomainError, ErrorCode, OwnedByUser, Timestamp, UserId};
use crate::ports::BlogRepository;

const BLOG_COLUMNS: &str =
    "id, owner_id, name, url, username, apikey, categories, created_at, updated_at";

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BlogRow {
    id: i64,
    owner_id: i64,
    name: String,
    url: String,
    username: String,
    apikey: String,
    categories: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        let id = BlogId::new(row.id).map_err(|e| corrupt_row("blog id", e))?;
        let owner_id = UserId::new(row.owner_id).map_err(|e| corrupt_row("owner id", e))?;
        Ok(Blog::reconstitute(
            id,
            owner_id,
            BlogDetails {
                name: row.name,
                url: row.url,
                username: row.username,
                apikey: row.apikey,
                categories: row.categories,
            },
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

fn map_write_error(err: sqlx::Error, name: &str, context: &str) -> DomainError {
    if violated_constraint(&err) == Some("blogs_owner_id_name_key") {
        return DomainError::new(ErrorCode::DuplicateBlogName, "Blog name already in use")
            .with_detail("name", name);
    }
    DomainError::database(context, err)
}

/// Escapes LIKE wildcards so the query matches literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, owner_id: UserId, details: BlogDetails) -> Result<Blog, DomainError> {
        let row: BlogRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO blogs (owner_id, name, url, username, apikey, categories)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            BLOG_COLUMNS
        ))
        .bind(owner_id.as_i64())
        .bind(&details.name)
        .bind(&details.url)
        .bind(&details.username)
        .bind(&details.apikey)
        .bind(&details.categories)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &details.name, "Failed to create blog"))?;

        row.try_into()
    }

    async fn update(&self, blog: &Blog) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs SET
                name = $2,
                url = $3,
                username = $4,
                apikey = $5,
                categories = $6,
                updated_at = $7
            WHERE id = $1 AND owner_id = $8
            "#,
        )
        .bind(blog.id().as_i64())
        .bind(blog.name())
        .bind(blog.url())
        .bind(blog.username())
        .bind(blog.apikey())
        .bind(blog.categories())
        .bind(blog.updated_at().as_datetime())
        .bind(blog.owner_id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, blog.name(), "Failed to update blog"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::BlogNotFound, "Blog not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, DomainError> {
        let row: Option<BlogRow> =
            sqlx::query_as(&format!("SELECT {} FROM blogs WHERE id = $1", BLOG_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch blog", e))?;

        row.map(Blog::try_from).transpose()
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Blog>, DomainError> {
        let rows: Vec<BlogRow> = sqlx::query_as(&format!(
            "SELECT {} FROM blogs WHERE owner_id = $1 ORDER BY id DESC",
            BLOG_COLUMNS
        ))
        .bind(owner_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list blogs", e))?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Blog>, DomainError> {
        let rows: Vec<BlogRow> = match query {
            Some(q) => {
                sqlx::query_as(&format!(
                    r#"
                    SELECT {} FROM blogs
                    WHERE name ILIKE $1 OR url ILIKE $1 OR username ILIKE $1
                    ORDER BY id DESC
                    "#,
                    BLOG_COLUMNS
                ))
                .bind(like_pattern(q))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!("SELECT {} FROM blogs ORDER BY id DESC", BLOG_COLUMNS))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::database("Failed to search blogs", e))?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn delete(&self, id: BlogId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete blog", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count blogs", e))?;

        Ok(to_count(count))
    }
}
