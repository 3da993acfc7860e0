//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresUserRepository` - Accounts
//! - `PostgresBlogRepository` - Blogs, unique name per owner
//! - `PostgresArticleRepository` - Articles with filtered listing
//!
//! Deleting a user cascades to their blogs and articles, and deleting a blog
//! cascades to its articles; both are foreign key rules in `migrations/`.

mod article_repository;
mod blog_repository;
mod user_repository;

pub use article_repository::PostgresArticleRepository;
pub use blog_repository::PostgresBlogRepository;
pub use user_repository::PostgresUserRepository;

use std::fmt;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// SQLSTATE for a foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Opens a connection pool and, if configured, applies pending migrations.
pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| DomainError::database("Failed to run migrations", e))?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

/// Name of the violated constraint, if `err` is a constraint violation.
fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION))
}

/// A stored value that no longer satisfies domain rules.
fn corrupt_row(field: &str, err: impl fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value in database: {}", field, err),
    )
}

fn to_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_have_no_constraint() {
        assert_eq!(violated_constraint(&sqlx::Error::RowNotFound), None);
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn corrupt_row_is_a_database_error() {
        let err = corrupt_row("status", "bogus");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("status"));
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(to_count(-1), 0);
        assert_eq!(to_count(12), 12);
    }
}
