//! Article command and query handlers.

mod create_article;
mod delete_article;
mod get_article;
mod list_articles;
mod update_article;

pub use create_article::{CreateArticleCommand, CreateArticleHandler};
pub use delete_article::{DeleteArticleCommand, DeleteArticleHandler};
pub use get_article::{GetArticleHandler, GetArticleQuery};
pub use list_articles::{ListArticlesHandler, ListArticlesQuery};
pub use update_article::{UpdateArticleCommand, UpdateArticleHandler};
