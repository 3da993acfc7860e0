//! ListArticlesHandler - The caller's articles, newest first.

use std::sync::Arc;

use crate::domain::article::{Article, ArticleError, ArticleStatus};
use crate::domain::foundation::{BlogId, UserId};
use crate::ports::{ArticleFilter, ArticleRepository};

/// Optional filters narrow the caller's own articles.
#[derive(Debug, Clone)]
pub struct ListArticlesQuery {
    pub owner_id: UserId,
    pub blog_id: Option<BlogId>,
    pub status: Option<ArticleStatus>,
}

pub struct ListArticlesHandler {
    articles: Arc<dyn ArticleRepository>,
}

impl ListArticlesHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    pub async fn handle(&self, query: ListArticlesQuery) -> Result<Vec<Article>, ArticleError> {
        let filter = ArticleFilter::owned_by(query.owner_id)
            .with_blog(query.blog_id)
            .with_status(query.status);
        Ok(self.articles.list(&filter).await?)
    }
}
