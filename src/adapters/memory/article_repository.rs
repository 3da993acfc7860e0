use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::article::{Article, NewArticle};
use crate::domain::foundation::{ArticleId, DomainError, ErrorCode, OwnedByUser, Timestamp};
use crate::ports::{ArticleFilter, ArticleRepository, StatusCounts};

#[async_trait]
impl ArticleRepository for InMemoryStore {
    async fn create(&self, article: NewArticle) -> Result<Article, DomainError> {
        let mut state = self.state.write().await;

        if !state.blogs.contains_key(&article.blog_id.as_i64()) {
            return Err(DomainError::new(ErrorCode::BlogNotFound, "Blog not found")
                .with_detail("blog_id", article.blog_id.to_string()));
        }

        let id = state.allocate_id();
        let now = Timestamp::now();
        let article = Article::reconstitute(ArticleId::new(id)?, article, now, now);
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, article: &Article) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.articles.get_mut(&article.id().as_i64()) {
            Some(stored) if stored.is_owner(article.owner_id()) => {
                *stored = article.clone();
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::ArticleNotFound,
                "Article not found",
            )),
        }
    }

    async fn find_by_id(&self, id: ArticleId) -> Result<Option<Article>, DomainError> {
        Ok(self.state.read().await.articles.get(&id.as_i64()).cloned())
    }

    async fn list(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .articles
            .values()
            .rev()
            .filter(|a| filter.accepts(a))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: ArticleId) -> Result<bool, DomainError> {
        Ok(self.state.write().await.articles.remove(&id.as_i64()).is_some())
    }

    async fn count_by_status(&self) -> Result<StatusCounts, DomainError> {
        let state = self.state.read().await;
        let mut counts = StatusCounts::default();
        for article in state.articles.values() {
            counts.add(article.status(), 1);
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleStatus, ArticleText};
    use crate::domain::blog::BlogDetails;
    use crate::domain::foundation::{BlogId, UserId};
    use crate::domain::user::NewUser;
    use crate::ports::{BlogRepository, UserRepository};
    use std::sync::Arc;

    const BODY: &str = "Cold brew is coffee steeped in cold water for many hours, then filtered and diluted.";

    fn text() -> ArticleText {
        ArticleText::new("Cold Brew at Home", BODY).unwrap()
    }

    async fn seed() -> (InMemoryStore, UserId, BlogId) {
        let store = InMemoryStore::new();
        let users: Arc<dyn UserRepository> = Arc::new(store.clone());
        let blogs: Arc<dyn BlogRepository> = Arc::new(store.clone());

        let user = users
            .create(NewUser {
                username: "barista".into(),
                email: "b@x.io".into(),
                password_hash: "hash".into(),
                is_admin: false,
            })
            .await
            .unwrap();
        let blog = blogs
            .create(
                user.id(),
                BlogDetails::new("Coffee", "https://c.example", "me", "0123456789", vec![])
                    .unwrap(),
            )
            .await
            .unwrap();
        (store, user.id(), blog.id())
    }

    #[tokio::test]
    async fn create_requires_existing_blog() {
        let store = InMemoryStore::new();
        let article = NewArticle::new(
            UserId::new(1).unwrap(),
            BlogId::new(99).unwrap(),
            text(),
            ArticleStatus::Draft,
        );
        let err = ArticleRepository::create(&store, article).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BlogNotFound);
    }

    #[tokio::test]
    async fn update_under_another_owner_is_not_found() {
        let (store, user, blog) = seed().await;
        let article = ArticleRepository::create(
            &store,
            NewArticle::new(user, blog, text(), ArticleStatus::Draft),
        )
        .await
        .unwrap();
        let stranger = UserId::new(user.as_i64() + 100).unwrap();
        let hijacked = Article::reconstitute(
            article.id(),
            NewArticle::new(stranger, blog, text(), ArticleStatus::Archived),
            *article.created_at(),
            *article.updated_at(),
        );

        let err = ArticleRepository::update(&store, &hijacked).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ArticleNotFound);

        let stored = ArticleRepository::find_by_id(&store, article.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status(), ArticleStatus::Draft);
    }

    #[tokio::test]
    async fn counts_by_status() {
        let (store, user, blog) = seed().await;
        let articles: Arc<dyn ArticleRepository> = Arc::new(store);

        for status in [ArticleStatus::Draft, ArticleStatus::Draft, ArticleStatus::Published] {
            articles
                .create(NewArticle::new(user, blog, text(), status))
                .await
                .unwrap();
        }

        let counts = articles.count_by_status().await.unwrap();
        assert_eq!(counts.draft, 2);
        assert_eq!(counts.published, 1);
        assert_eq!(counts.archived, 0);
    }

    #[tokio::test]
    async fn deleting_blog_cascades_to_articles() {
        let (store, user, blog) = seed().await;
        let articles: Arc<dyn ArticleRepository> = Arc::new(store.clone());
        let blogs: Arc<dyn BlogRepository> = Arc::new(store.clone());

        articles
            .create(NewArticle::new(user, blog, text(), ArticleStatus::Draft))
            .await
            .unwrap();
        assert!(blogs.delete(blog).await.unwrap());

        assert!(articles.list(&ArticleFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_user_cascades_to_blogs_and_articles() {
        let (store, user, blog) = seed().await;
        let articles: Arc<dyn ArticleRepository> = Arc::new(store.clone());
        let blogs: Arc<dyn BlogRepository> = Arc::new(store.clone());
        let users: Arc<dyn UserRepository> = Arc::new(store.clone());

        articles
            .create(NewArticle::new(user, blog, text(), ArticleStatus::Draft))
            .await
            .unwrap();
        assert!(users.delete(user).await.unwrap());

        assert_eq!(blogs.count().await.unwrap(), 0);
        assert_eq!(articles.count_by_status().await.unwrap().total(), 0);
    }
}
