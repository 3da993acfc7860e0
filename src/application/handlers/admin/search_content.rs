//! Admin content search across every account.

use std::sync::Arc;

use crate::domain::article::{Article, ArticleError, ArticleStatus};
use crate::domain::blog::{Blog, BlogError};
use crate::ports::{ArticleFilter, ArticleRepository, BlogRepository};

/// Blogs matching `query` on name, URL or username. `None` or blank lists all.
#[derive(Debug, Clone, Default)]
pub struct SearchBlogsQuery {
    pub query: Option<String>,
}

pub struct SearchBlogsHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl SearchBlogsHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    pub async fn handle(&self, query: SearchBlogsQuery) -> Result<Vec<Blog>, BlogError> {
        let needle = query.query.as_deref().map(str::trim).filter(|q| !q.is_empty());
        Ok(self.blogs.search(needle).await?)
    }
}

/// Articles by status and free-text match on title or content.
#[derive(Debug, Clone, Default)]
pub struct SearchArticlesQuery {
    pub status: Option<ArticleStatus>,
    pub query: Option<String>,
}

pub struct SearchArticlesHandler {
    articles: Arc<dyn ArticleRepository>,
}

impl SearchArticlesHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    pub async fn handle(&self, query: SearchArticlesQuery) -> Result<Vec<Article>, ArticleError> {
        let filter = ArticleFilter::default()
            .with_status(query.status)
            .with_query(query.query);
        Ok(self.articles.list(&filter).await?)
    }
}
