//! Article repository port.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::article::{Article, ArticleStatus, NewArticle};
use crate::domain::foundation::{ArticleId, BlogId, DomainError, OwnedByUser, UserId};

/// Criteria for listing articles. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub owner_id: Option<UserId>,
    pub blog_id: Option<BlogId>,
    pub status: Option<ArticleStatus>,
    /// Case-insensitive search over title and content.
    pub query: Option<String>,
}

impl ArticleFilter {
    /// Articles written by one user.
    pub fn owned_by(owner_id: UserId) -> Self {
        Self {
            owner_id: Some(owner_id),
            ..Self::default()
        }
    }

    pub fn with_blog(mut self, blog_id: Option<BlogId>) -> Self {
        self.blog_id = blog_id;
        self
    }

    pub fn with_status(mut self, status: Option<ArticleStatus>) -> Self {
        self.status = status;
        self
    }

    /// Blank queries are ignored.
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self
    }

    /// In-memory evaluation, shared by non-SQL implementations.
    pub fn accepts(&self, article: &Article) -> bool {
        self.owner_id.map_or(true, |owner| article.is_owner(&owner))
            && self.blog_id.map_or(true, |blog| article.blog_id() == blog)
            && self.status.map_or(true, |status| article.status() == status)
            && self.query.as_deref().map_or(true, |q| article.matches(q))
    }
}

/// Number of articles in each status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub draft: u64,
    pub published: u64,
    pub archived: u64,
}

impl StatusCounts {
    pub fn total(&self) -> u64 {
        self.draft + self.published + self.archived
    }

    pub fn add(&mut self, status: ArticleStatus, count: u64) {
        match status {
            ArticleStatus::Draft => self.draft += count,
            ArticleStatus::Published => self.published += count,
            ArticleStatus::Archived => self.archived += count,
        }
    }
}

/// Repository port for articles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Insert an article and return it with its assigned id.
    async fn create(&self, article: NewArticle) -> Result<Article, DomainError>;

    /// Persist changes to an existing article.
    ///
    /// # Errors
    ///
    /// - `ArticleNotFound` if the article no longer exists
    async fn update(&self, article: &Article) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, DomainError>;

    /// Articles matching `filter`, newest first.
    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DomainError>;

    /// Returns `false` if the article did not exist.
    async fn delete(&self, id: ArticleId) -> Result<bool, DomainError>;

    async fn count_by_status(&self) -> Result<StatusCounts, DomainError>;
}
