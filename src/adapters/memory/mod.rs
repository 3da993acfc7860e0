//! In-memory adapters for the repository ports.
//!
//! A single `InMemoryStore` backs all three repositories so that cascading
//! deletes (user → blogs → articles) behave like the database schema. Useful
//! for tests and for running the API without Postgres.

mod article_repository;
mod blog_repository;
mod user_repository;

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::article::Article;
use crate::domain::blog::Blog;
use crate::domain::user::UserAccount;

#[derive(Debug, Default)]
struct StoreState {
    next_id: i64,
    users: BTreeMap<i64, UserAccount>,
    blogs: BTreeMap<i64, Blog>,
    articles: BTreeMap<i64, Article>,
}

impl StoreState {
    /// Ids are shared across tables; they only need to be unique per table.
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory implementation of `UserRepository`, `BlogRepository` and
/// `ArticleRepository`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        *state = StoreState::default();
    }
}
