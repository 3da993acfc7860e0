//! DeleteArticleHandler - Owner and admin article deletion.

use std::sync::Arc;

use tracing::info;

use super::get_article::load_visible;
use crate::domain::article::ArticleError;
use crate::domain::foundation::{ArticleId, AuthenticatedUser};
use crate::ports::ArticleRepository;

#[derive(Debug, Clone)]
pub struct DeleteArticleCommand {
    pub actor: AuthenticatedUser,
    pub article_id: ArticleId,
}

pub struct DeleteArticleHandler {
    articles: Arc<dyn ArticleRepository>,
}

impl DeleteArticleHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    pub async fn handle(&self, cmd: DeleteArticleCommand) -> Result<(), ArticleError> {
        load_visible(self.articles.as_ref(), &cmd.actor, cmd.article_id).await?;

        if !self.articles.delete(cmd.article_id).await? {
            return Err(ArticleError::NotFound(cmd.article_id));
        }

        info!(
            article_id = %cmd.article_id,
            deleted_by = %cmd.actor.id,
            as_admin = cmd.actor.is_admin,
            "Article deleted"
        );
        Ok(())
    }
}
