use async_trait::async_trait;

use super::InMemoryStore;
use crate::domain::blog::{Blog, BlogDetails};
use crate::domain::foundation::{BlogId, DomainError, ErrorCode, OwnedByUser, Timestamp, UserId};
use crate::ports::BlogRepository;

fn duplicate_name(name: &str) -> DomainError {
    DomainError::new(ErrorCode::DuplicateBlogName, "Blog name already in use")
        .with_detail("name", name)
}

#[async_trait]
impl BlogRepository for InMemoryStore {
    async fn create(&self, owner_id: UserId, details: BlogDetails) -> Result<Blog, DomainError> {
        let mut state = self.state.write().await;

        if state
            .blogs
            .values()
            .any(|b| b.is_owner(&owner_id) && b.name() == details.name)
        {
            return Err(duplicate_name(&details.name));
        }

        let id = state.allocate_id();
        let now = Timestamp::now();
        let blog = Blog::reconstitute(BlogId::new(id)?, owner_id, details, now, now);
        state.blogs.insert(id, blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: &Blog) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state.blogs.values().any(|b| {
            b.id() != blog.id() && b.owner_id() == blog.owner_id() && b.name() == blog.name()
        }) {
            return Err(duplicate_name(blog.name()));
        }

        match state.blogs.get_mut(&blog.id().as_i64()) {
            Some(stored) if stored.is_owner(blog.owner_id()) => {
                *stored = blog.clone();
                Ok(())
            }
            _ => Err(DomainError::new(ErrorCode::BlogNotFound, "Blog not found")),
        }
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, DomainError> {
        Ok(self.state.read().await.blogs.get(&id.as_i64()).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Blog>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .blogs
            .values()
            .rev()
            .filter(|b| b.is_owner(&owner_id))
            .cloned()
            .collect())
    }

    async fn search(&self, query: Option<&str>) -> Result<Vec<Blog>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .blogs
            .values()
            .rev()
            .filter(|b| query.map_or(true, |q| b.matches(q)))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: BlogId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        if state.blogs.remove(&id.as_i64()).is_none() {
            return Ok(false);
        }
        state.articles.retain(|_, article| article.blog_id() != id);
        Ok(true)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.state.read().await.blogs.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> BlogDetails {
        BlogDetails::new(name, "https://example.com", "writer", "0123456789", vec![]).unwrap()
    }

    fn user(id: i64) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn names_are_unique_per_owner_only() {
        let store = InMemoryStore::new();
        store.create(user(1), details("Notes")).await.unwrap();

        let err = store.create(user(1), details("Notes")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateBlogName);
        assert_eq!(err.details.get("name"), Some(&"Notes".to_string()));

        assert!(store.create(user(2), details("Notes")).await.is_ok());
    }

    #[tokio::test]
    async fn rename_onto_sibling_name_is_rejected() {
        let store = InMemoryStore::new();
        store.create(user(1), details("Alpha")).await.unwrap();
        let mut beta = store.create(user(1), details("Beta")).await.unwrap();

        beta.update(details("Alpha"));
        let err = store.update(&beta).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateBlogName);

        beta.update(details("Beta"));
        assert!(store.update(&beta).await.is_ok());
    }

    #[tokio::test]
    async fn update_under_another_owner_is_not_found() {
        let store = InMemoryStore::new();
        let mine = store.create(user(1), details("Mine")).await.unwrap();
        let hijacked = Blog::reconstitute(
            mine.id(),
            user(2),
            details("Taken"),
            *mine.created_at(),
            *mine.updated_at(),
        );

        let err = store.update(&hijacked).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BlogNotFound);

        let stored = store.find_by_id(mine.id()).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Mine");
        assert!(stored.is_owner(&user(1)));
    }

    #[tokio::test]
    async fn list_by_owner_filters_and_orders() {
        let store = InMemoryStore::new();
        store.create(user(1), details("Old")).await.unwrap();
        store.create(user(2), details("Theirs")).await.unwrap();
        store.create(user(1), details("New")).await.unwrap();

        let names: Vec<String> = store
            .list_by_owner(user(1))
            .await
            .unwrap()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["New", "Old"]);
    }

    #[tokio::test]
    async fn search_matches_case_insensitively() {
        let store = InMemoryStore::new();
        store.create(user(1), details("Garden Diary")).await.unwrap();
        store.create(user(1), details("Tech Log")).await.unwrap();

        assert_eq!(store.search(Some("garden")).await.unwrap().len(), 1);
        assert_eq!(store.search(None).await.unwrap().len(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
