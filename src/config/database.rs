//! Storage selection and Postgres pool settings
//!
//! Postgres is optional: without `BLOGAPP__DATABASE__URL` the server runs on
//! the in-memory store, which loses everything on restart.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Largest pool the server will open.
const MAX_POOL_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL; unset or blank selects memory
    pub url: Option<String>,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a free pooled connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Seconds before an unused connection is closed
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Apply `migrations/` when the pool opens
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Where accounts, blogs and articles live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage<'a> {
    Postgres(&'a str),
    InMemory,
}

impl DatabaseConfig {
    pub fn storage(&self) -> Storage<'_> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Storage::Postgres(url),
            _ => Storage::InMemory,
        }
    }

    /// The connection URL, if Postgres is configured.
    pub fn postgres_url(&self) -> Option<&str> {
        match self.storage() {
            Storage::Postgres(url) => Some(url),
            Storage::InMemory => None,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Pool settings are checked even for in-memory runs so a later switch
    /// to Postgres does not surface them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Storage::Postgres(url) = self.storage() {
            let scheme = url.split("://").next().unwrap_or_default();
            if !matches!(scheme, "postgres" | "postgresql") || !url.contains("://") {
                return Err(ValidationError::InvalidDatabaseUrl);
            }
        }
        match (self.min_connections, self.max_connections) {
            (min, max) if min > max => Err(ValidationError::InvalidPoolSize),
            (_, max) if max > MAX_POOL_SIZE => Err(ValidationError::PoolSizeTooLarge),
            _ => Ok(()),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_run_migrations() -> bool {
    true
}
