//! CreateBlogHandler - Command handler for registering a blog.

use std::sync::Arc;

use tracing::info;

use crate::domain::blog::{Blog, BlogDetails, BlogError};
use crate::domain::foundation::UserId;
use crate::ports::BlogRepository;

/// Command to register a blog.
#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    pub owner_id: UserId,
    pub name: String,
    pub url: String,
    pub username: String,
    pub apikey: String,
    pub categories: Vec<String>,
}

/// Handler for blog registration.
pub struct CreateBlogHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl CreateBlogHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    pub async fn handle(&self, cmd: CreateBlogCommand) -> Result<Blog, BlogError> {
        let details = BlogDetails::new(
            &cmd.name,
            &cmd.url,
            &cmd.username,
            &cmd.apikey,
            cmd.categories,
        )?;

        let blog = self.blogs.create(cmd.owner_id, details).await?;

        info!(
            blog_id = %blog.id(),
            owner_id = %cmd.owner_id,
            name = %blog.name(),
            "Blog created"
        );

        Ok(blog)
    }
}
