//! GetBlogHandler - Query handler for one blog.

use std::sync::Arc;

use crate::domain::blog::{Blog, BlogError};
use crate::domain::foundation::{AuthenticatedUser, BlogId, OwnedByUser};
use crate::ports::BlogRepository;

/// Query for one blog.
#[derive(Debug, Clone)]
pub struct GetBlogQuery {
    pub actor: AuthenticatedUser,
    pub blog_id: BlogId,
}

pub struct GetBlogHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl GetBlogHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    /// Someone else's blog is reported as `NotFound`, same as a missing one.
    pub async fn handle(&self, query: GetBlogQuery) -> Result<Blog, BlogError> {
        load_visible(self.blogs.as_ref(), &query.actor, query.blog_id).await
    }
}

/// Loads a blog the actor may see: their own, or any blog for an admin.
pub(crate) async fn load_visible(
    blogs: &dyn BlogRepository,
    actor: &AuthenticatedUser,
    blog_id: BlogId,
) -> Result<Blog, BlogError> {
    blogs
        .find_by_id(blog_id)
        .await?
        .filter(|blog| blog.is_visible_to(actor))
        .ok_or(BlogError::NotFound(blog_id))
}
