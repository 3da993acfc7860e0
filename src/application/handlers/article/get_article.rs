//! GetArticleHandler - Query handler for one article.

use std::sync::Arc;

use crate::domain::article::{Article, ArticleError};
use crate::domain::foundation::{ArticleId, AuthenticatedUser, OwnedByUser};
use crate::ports::ArticleRepository;

#[derive(Debug, Clone)]
pub struct GetArticleQuery {
    pub actor: AuthenticatedUser,
    pub article_id: ArticleId,
}

pub struct GetArticleHandler {
    articles: Arc<dyn ArticleRepository>,
}

impl GetArticleHandler {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self { articles }
    }

    pub async fn handle(&self, query: GetArticleQuery) -> Result<Article, ArticleError> {
        load_visible(self.articles.as_ref(), &query.actor, query.article_id).await
    }
}

/// Loads an article the actor may see; anything else is `NotFound`.
pub(crate) async fn load_visible(
    articles: &dyn ArticleRepository,
    actor: &AuthenticatedUser,
    article_id: ArticleId,
) -> Result<Article, ArticleError> {
    articles
        .find_by_id(article_id)
        .await?
        .filter(|article| article.is_visible_to(actor))
        .ok_or(ArticleError::NotFound(article_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::article::{ArticleStatus, ArticleText, NewArticle};
    use crate::domain::blog::BlogDetails;
    use crate::domain::foundation::UserId;
    use crate::ports::BlogRepository;

    fn actor(id: i64, is_admin: bool) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), "user", "user@example.com", is_admin)
    }

    async fn seed(store: &InMemoryStore) -> ArticleId {
        let owner = UserId::new(1).unwrap();
        let details =
            BlogDetails::new("Notes", "https://notes.example.com", "writer", "0123456789", vec![])
                .unwrap();
        let blog = BlogRepository::create(store, owner, details).await.unwrap();
        let text = ArticleText::new(
            "Field notes",
            "Short field notes from a long walk, with more than ten words in total here.",
        )
        .unwrap();
        ArticleRepository::create(
            store,
            NewArticle::new(owner, blog.id(), text, ArticleStatus::Draft),
        )
        .await
        .unwrap()
        .id()
    }

    #[tokio::test]
    async fn visibility_follows_ownership_and_admin_role() {
        let store = InMemoryStore::new();
        let article_id = seed(&store).await;
        let handler = GetArticleHandler::new(Arc::new(store));

        let cases = [
            (actor(1, false), true),
            (actor(2, false), false),
            (actor(3, true), true),
        ];
        for (viewer, visible) in cases {
            let result = handler
                .handle(GetArticleQuery {
                    actor: viewer,
                    article_id,
                })
                .await;
            assert_eq!(result.is_ok(), visible);
        }
    }

    #[tokio::test]
    async fn missing_article_is_not_found() {
        let handler = GetArticleHandler::new(Arc::new(InMemoryStore::new()));
        let article_id = ArticleId::new(5).unwrap();

        let err = handler
            .handle(GetArticleQuery {
                actor: actor(1, false),
                article_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, ArticleError::NotFound(article_id));
    }
}
