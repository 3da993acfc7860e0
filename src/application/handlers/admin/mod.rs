//! Administrator handlers.
//!
//! Admin deletion of blogs and articles reuses `DeleteBlogHandler` and
//! `DeleteArticleHandler`, whose visibility check admits administrators.

mod get_stats;
mod manage_users;
mod search_content;

pub use get_stats::{GetStatsHandler, SiteStats};
pub use manage_users::{
    DeleteUserCommand, DeleteUserHandler, ListUsersHandler, SetUserRoleCommand,
    SetUserRoleHandler,
};
pub use search_content::{
    SearchArticlesHandler, SearchArticlesQuery, SearchBlogsHandler, SearchBlogsQuery,
};
