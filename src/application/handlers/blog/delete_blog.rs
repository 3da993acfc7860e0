//! DeleteBlogHandler - Deletes a blog and, with it, its articles.
//!
//! Shared by the owner route and the admin route; admins pass the
//! visibility check for every blog.

use std::sync::Arc;

use tracing::info;

use super::get_blog::load_visible;
use crate::domain::blog::BlogError;
use crate::domain::foundation::{AuthenticatedUser, BlogId};
use crate::ports::BlogRepository;

/// Command to delete a blog.
#[derive(Debug, Clone)]
pub struct DeleteBlogCommand {
    pub actor: AuthenticatedUser,
    pub blog_id: BlogId,
}

pub struct DeleteBlogHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl DeleteBlogHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    pub async fn handle(&self, cmd: DeleteBlogCommand) -> Result<(), BlogError> {
        let blog = load_visible(self.blogs.as_ref(), &cmd.actor, cmd.blog_id).await?;

        if !self.blogs.delete(blog.id()).await? {
            return Err(BlogError::NotFound(cmd.blog_id));
        }

        info!(
            blog_id = %cmd.blog_id,
            deleted_by = %cmd.actor.id,
            as_admin = cmd.actor.is_admin,
            "Blog deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::article::{ArticleStatus, ArticleText, NewArticle};
    use crate::domain::blog::BlogDetails;
    use crate::domain::foundation::UserId;
    use crate::ports::{ArticleFilter, ArticleRepository};

    fn actor(id: i64, is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), "user", "user@example.com", is_admin)
    }

    async fn seed(store: &InMemoryStore, owner: UserId) -> BlogId {
        let details =
            BlogDetails::new("Doomed", "https://example.com", "writer", "0123456789", vec![])
                .unwrap();
        let blog = BlogRepository::create(store, owner, details).await.unwrap();
        let text = ArticleText::new(
            "An article that will go",
            "This article body has more than ten words so that it passes validation rules.",
        )
        .unwrap();
        ArticleRepository::create(
            store,
            NewArticle::new(owner, blog.id(), text, ArticleStatus::Draft),
        )
        .await
        .unwrap();
        blog.id()
    }

    #[tokio::test]
    async fn owner_delete_cascades_articles() {
        let store = InMemoryStore::new();
        let owner = UserId::new(1).unwrap();
        let blog_id = seed(&store, owner).await;

        DeleteBlogHandler::new(Arc::new(store.clone()))
            .handle(DeleteBlogCommand {
                actor: actor(1, false),
                blog_id,
            })
            .await
            .unwrap();

        assert!(BlogRepository::find_by_id(&store, blog_id).await.unwrap().is_none());
        let left = ArticleRepository::list(&store, &ArticleFilter::owned_by(owner))
            .await
            .unwrap();
        assert!(left.is_empty());
    }

    #[tokio::test]
    async fn stranger_cannot_delete() {
        let store = InMemoryStore::new();
        let blog_id = seed(&store, UserId::new(1).unwrap()).await;

        let err = DeleteBlogHandler::new(Arc::new(store.clone()))
            .handle(DeleteBlogCommand {
                actor: actor(2, false),
                blog_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, BlogError::NotFound(blog_id));
        assert!(BlogRepository::find_by_id(&store, blog_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn admin_can_delete_any_blog() {
        let store = InMemoryStore::new();
        let blog_id = seed(&store, UserId::new(1).unwrap()).await;

        let result = DeleteBlogHandler::new(Arc::new(store))
            .handle(DeleteBlogCommand {
                actor: actor(99, true),
                blog_id,
            })
            .await;

        assert!(result.is_ok());
    }
}
