//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{corrupt_row, to_count, violated_constraint};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::{NewUser, UserAccount};
use crate::ports::UserRepository;

const USER_COLUMNS: &str =
    "id, username, email, password_hash, is_admin, created_at, updated_at";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for UserAccount {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::new(row.id).map_err(|e| corrupt_row("user id", e))?;
        Ok(UserAccount::reconstitute(
            id,
            NewUser {
                username: row.username,
                email: row.email,
                password_hash: row.password_hash,
                is_admin: row.is_admin,
            },
            Timestamp::from_datetime(row.created_at),
            Timestamp::from_datetime(row.updated_at),
        ))
    }
}

fn map_write_error(err: sqlx::Error, user: &NewUser) -> DomainError {
    match violated_constraint(&err) {
        Some("users_username_key") => {
            DomainError::new(ErrorCode::DuplicateUsername, "Username already taken")
                .with_detail("username", user.username.clone())
        }
        Some("users_email_key") => {
            DomainError::new(ErrorCode::DuplicateEmail, "Email already registered")
                .with_detail("email", user.email.clone())
        }
        _ => DomainError::database("Failed to save user", err),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<UserAccount, DomainError> {
        let row: UserRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &user))?;

        row.try_into()
    }

    async fn update(&self, user: &UserAccount) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = $2,
                password_hash = $3,
                is_admin = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_i64())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.is_admin())
        .bind(user.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(UserAccount::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE username = $1",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        row.map(UserAccount::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<UserAccount>, DomainError> {
        let rows: Vec<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users ORDER BY id DESC", USER_COLUMNS))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to list users", e))?;

        rows.into_iter().map(UserAccount::try_from).collect()
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count users", e))?;

        Ok(to_count(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> UserRow {
        let now = Utc::now();
        UserRow {
            id,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_admin: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_converts_to_account() {
        let account = UserAccount::try_from(row(7)).unwrap();

        assert_eq!(account.id().as_i64(), 7);
        assert_eq!(account.username(), "alice");
        assert!(account.is_admin());
    }

    #[test]
    fn non_positive_id_is_a_database_error() {
        let err = UserAccount::try_from(row(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn unrelated_write_errors_are_database_errors() {
        let user = NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_admin: false,
        };

        let err = map_write_error(sqlx::Error::PoolTimedOut, &user);

        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
