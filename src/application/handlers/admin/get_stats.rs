//! GetStatsHandler - Site-wide counts for the admin dashboard.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::ports::{ArticleRepository, BlogRepository, StatusCounts, UserRepository};

/// Totals across all accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteStats {
    pub users: u64,
    pub blogs: u64,
    pub articles: StatusCounts,
}

pub struct GetStatsHandler {
    users: Arc<dyn UserRepository>,
    blogs: Arc<dyn BlogRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl GetStatsHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            users,
            blogs,
            articles,
        }
    }

    pub async fn handle(&self) -> Result<SiteStats, DomainError> {
        let (users, blogs, articles) = tokio::try_join!(
            self.users.count(),
            self.blogs.count(),
            self.articles.count_by_status(),
        )?;

        Ok(SiteStats {
            users,
            blogs,
            articles,
        })
    }
}
