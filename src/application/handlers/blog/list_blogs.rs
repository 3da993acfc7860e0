//! ListBlogsHandler - The caller's own blogs, newest first.

use std::sync::Arc;

use crate::domain::blog::{Blog, BlogError};
use crate::domain::foundation::UserId;
use crate::ports::BlogRepository;

#[derive(Debug, Clone)]
pub struct ListBlogsQuery {
    pub owner_id: UserId,
}

pub struct ListBlogsHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl ListBlogsHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    pub async fn handle(&self, query: ListBlogsQuery) -> Result<Vec<Blog>, BlogError> {
        Ok(self.blogs.list_by_owner(query.owner_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::blog::BlogDetails;

    #[tokio::test]
    async fn lists_only_own_blogs_newest_first() {
        let store = InMemoryStore::new();
        let me = UserId::new(1).unwrap();
        let other = UserId::new(2).unwrap();
        for (owner, name) in [(me, "First"), (other, "Theirs"), (me, "Second")] {
            let details =
                BlogDetails::new(name, "https://example.com", "writer", "0123456789", vec![])
                    .unwrap();
            BlogRepository::create(&store, owner, details).await.unwrap();
        }

        let blogs = ListBlogsHandler::new(Arc::new(store))
            .handle(ListBlogsQuery { owner_id: me })
            .await
            .unwrap();

        let names: Vec<&str> = blogs.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }
}
