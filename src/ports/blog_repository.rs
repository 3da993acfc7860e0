//! Blog repository port.
//!
//! Blog names are unique per owner. Implementations report a collision as
//! `DuplicateBlogName` with the name in `details["name"]`.

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogDetails};
use crate::domain::foundation::{BlogId, DomainError, UserId};

/// Repository port for blogs.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a blog for `owner_id` and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateBlogName` if the owner already has a blog with this name
    /// - `DatabaseError` on persistence failure
    async fn create(&self, owner_id: UserId, details: BlogDetails) -> Result<Blog, DomainError>;

    /// Persist changes to an existing blog.
    ///
    /// # Errors
    ///
    /// - `DuplicateBlogName` if the new name collides with another of the owner's blogs
    /// - `BlogNotFound` if the blog no longer exists
    async fn update(&self, blog: &Blog) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, DomainError>;

    /// Blogs owned by a user, newest first.
    async fn list_by_owner(&self, owner_id: UserId) -> Result<Vec<Blog>, DomainError>;

    /// All blogs, newest first, optionally filtered by a case-insensitive
    /// search over name, URL and username.
    async fn search(&self, query: Option<&str>) -> Result<Vec<Blog>, DomainError>;

    /// Delete a blog and its articles. Returns `false` if it did not exist.
    async fn delete(&self, id: BlogId) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
