//! UpdateBlogHandler - Command handler for editing a blog.

use std::sync::Arc;

use tracing::info;

use super::get_blog::load_visible;
use crate::domain::blog::{Blog, BlogDetails, BlogError};
use crate::domain::foundation::{AuthenticatedUser, BlogId};
use crate::ports::BlogRepository;

/// Command to replace a blog's details.
#[derive(Debug, Clone)]
pub struct UpdateBlogCommand {
    pub actor: AuthenticatedUser,
    pub blog_id: BlogId,
    pub name: String,
    pub url: String,
    pub username: String,
    pub apikey: String,
    pub categories: Vec<String>,
}

pub struct UpdateBlogHandler {
    blogs: Arc<dyn BlogRepository>,
}

impl UpdateBlogHandler {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    pub async fn handle(&self, cmd: UpdateBlogCommand) -> Result<Blog, BlogError> {
        let mut blog = load_visible(self.blogs.as_ref(), &cmd.actor, cmd.blog_id).await?;

        let details = BlogDetails::new(
            &cmd.name,
            &cmd.url,
            &cmd.username,
            &cmd.apikey,
            cmd.categories,
        )?;
        blog.update(details);
        self.blogs.update(&blog).await?;

        info!(blog_id = %blog.id(), updated_by = %cmd.actor.id, "Blog updated");

        Ok(blog)
    }
}
