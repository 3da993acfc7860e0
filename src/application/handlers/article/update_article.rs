//! UpdateArticleHandler - Replaces title, content, status and blog.

use std::sync::Arc;

use tracing::info;

use super::create_article::require_authors_blog;
use super::get_article::load_visible;
use crate::domain::article::{Article, ArticleError, ArticleStatus, ArticleText};
use crate::domain::foundation::{ArticleId, AuthenticatedUser, BlogId, OwnedByUser};
use crate::ports::{ArticleRepository, BlogRepository};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub actor: AuthenticatedUser,
    pub article_id: ArticleId,
    pub blog_id: BlogId,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
}

pub struct UpdateArticleHandler {
    articles: Arc<dyn ArticleRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl UpdateArticleHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { articles, blogs }
    }

    pub async fn handle(&self, cmd: UpdateArticleCommand) -> Result<Article, ArticleError> {
        let mut article = load_visible(self.articles.as_ref(), &cmd.actor, cmd.article_id).await?;
        let text = ArticleText::new(&cmd.title, &cmd.content)?;

        // The blog must belong to the article's author, whoever edits it.
        require_authors_blog(self.blogs.as_ref(), *article.owner_id(), cmd.blog_id).await?;

        let was_published = article.published_at().is_some();
        article.revise(cmd.blog_id, text, cmd.status);
        self.articles.update(&article).await?;

        info!(
            article_id = %article.id(),
            status = %article.status().as_str(),
            first_publication = !was_published && article.published_at().is_some(),
            "Article updated"
        );

        Ok(article)
    }
}
