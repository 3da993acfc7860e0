//! Blog command and query handlers.

mod create_blog;
mod delete_blog;
mod get_blog;
mod list_blogs;
mod update_blog;

pub use create_blog::{CreateBlogCommand, CreateBlogHandler};
pub use delete_blog::{DeleteBlogCommand, DeleteBlogHandler};
pub use get_blog::{GetBlogHandler, GetBlogQuery};
pub use list_blogs::{ListBlogsHandler, ListBlogsQuery};
pub use update_blog::{UpdateBlogCommand, UpdateBlogHandler};
