//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, grouped by
//! area. Each handler holds its ports as `Arc<dyn Port>` and exposes a single
//! `handle` method.

pub mod account;
pub mod admin;
pub mod article;
pub mod blog;
pub mod drafting;

pub use account::{
    GetAccountHandler, GetAccountQuery, LoginUserCommand, LoginUserHandler, LoginUserResult,
    RegisterUserCommand, RegisterUserHandler,
};
pub use admin::{
    DeleteUserCommand, DeleteUserHandler, GetStatsHandler, ListUsersHandler,
    SearchArticlesHandler, SearchArticlesQuery, SearchBlogsHandler, SearchBlogsQuery,
    SetUserRoleCommand, SetUserRoleHandler, SiteStats,
};
pub use article::{
    CreateArticleCommand, CreateArticleHandler, DeleteArticleCommand, DeleteArticleHandler,
    GetArticleHandler, GetArticleQuery, ListArticlesHandler, ListArticlesQuery,
    UpdateArticleCommand, UpdateArticleHandler,
};
pub use blog::{
    CreateBlogCommand, CreateBlogHandler, DeleteBlogCommand, DeleteBlogHandler, GetBlogHandler,
    GetBlogQuery, ListBlogsHandler, ListBlogsQuery, UpdateBlogCommand, UpdateBlogHandler,
};
pub use drafting::{GenerateDraftCommand, GenerateDraftHandler};
