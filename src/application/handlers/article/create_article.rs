//! CreateArticleHandler - Command handler for writing an article.

use std::sync::Arc;

use tracing::info;

use crate::domain::article::{Article, ArticleError, ArticleStatus, ArticleText, NewArticle};
use crate::domain::foundation::{BlogId, OwnedByUser, UserId};
use crate::ports::{ArticleRepository, BlogRepository};

/// Command to create an article.
#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub author_id: UserId,
    pub blog_id: BlogId,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
}

pub struct CreateArticleHandler {
    articles: Arc<dyn ArticleRepository>,
    blogs: Arc<dyn BlogRepository>,
}

impl CreateArticleHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self { articles, blogs }
    }

    pub async fn handle(&self, cmd: CreateArticleCommand) -> Result<Article, ArticleError> {
        let text = ArticleText::new(&cmd.title, &cmd.content)?;
        require_authors_blog(self.blogs.as_ref(), cmd.author_id, cmd.blog_id).await?;

        let article = self
            .articles
            .create(NewArticle::new(cmd.author_id, cmd.blog_id, text, cmd.status))
            .await?;

        info!(
            article_id = %article.id(),
            blog_id = %article.blog_id(),
            status = %article.status().as_str(),
            "Article created"
        );

        Ok(article)
    }
}

/// Articles may only be filed under a blog their author owns.
pub(crate) async fn require_authors_blog(
    blogs: &dyn BlogRepository,
    author_id: UserId,
    blog_id: BlogId,
) -> Result<(), ArticleError> {
    match blogs.find_by_id(blog_id).await? {
        Some(blog) if blog.is_owner(&author_id) => Ok(()),
        _ => Err(ArticleError::BlogNotFound(blog_id)),
    }
}
