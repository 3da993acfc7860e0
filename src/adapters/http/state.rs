//! Shared application state for the HTTP adapters.

use std::sync::Arc;

use crate::application::handlers::{
    CreateArticleHandler, CreateBlogHandler, DeleteArticleHandler, DeleteBlogHandler,
    DeleteUserHandler, GenerateDraftHandler, GetAccountHandler, GetArticleHandler, GetBlogHandler,
    GetStatsHandler, ListArticlesHandler, ListBlogsHandler, ListUsersHandler, LoginUserHandler,
    RegisterUserHandler, SearchArticlesHandler, SearchBlogsHandler, SetUserRoleHandler,
    UpdateArticleHandler, UpdateBlogHandler,
};
use crate::ports::{
    ArticleRepository, BlogRepository, PasswordHasher, SessionValidator, TextGenerator,
    TokenIssuer, UserRepository,
};

/// Dependencies shared by every request.
///
/// Cloned per request; everything inside is behind an `Arc`. Handlers are
/// built on demand, except login, which keeps its lazily computed dummy hash
/// across requests.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    pub generator: Arc<dyn TextGenerator>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub sessions: Arc<dyn SessionValidator>,
    pub admin_username: Option<String>,
    login: Arc<LoginUserHandler>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        users: Arc<dyn UserRepository>,
        blogs: Arc<dyn BlogRepository>,
        articles: Arc<dyn ArticleRepository>,
        generator: Arc<dyn TextGenerator>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        sessions: Arc<dyn SessionValidator>,
        admin_username: Option<String>,
    ) -> Self {
        let login = Arc::new(LoginUserHandler::new(users.clone(), hasher.clone(), tokens));
        Self {
            users,
            blogs,
            articles,
            generator,
            hasher,
            sessions,
            admin_username,
            login,
        }
    }

    // ----- Accounts -----

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(
            self.users.clone(),
            self.hasher.clone(),
            self.admin_username.clone(),
        )
    }

    pub fn login_user_handler(&self) -> &LoginUserHandler {
        &self.login
    }

    pub fn get_account_handler(&self) -> GetAccountHandler {
        GetAccountHandler::new(self.users.clone())
    }

    // ----- Blogs -----

    pub fn create_blog_handler(&self) -> CreateBlogHandler {
        CreateBlogHandler::new(self.blogs.clone())
    }

    pub fn list_blogs_handler(&self) -> ListBlogsHandler {
        ListBlogsHandler::new(self.blogs.clone())
    }

    pub fn get_blog_handler(&self) -> GetBlogHandler {
        GetBlogHandler::new(self.blogs.clone())
    }

    pub fn update_blog_handler(&self) -> UpdateBlogHandler {
        UpdateBlogHandler::new(self.blogs.clone())
    }

    pub fn delete_blog_handler(&self) -> DeleteBlogHandler {
        DeleteBlogHandler::new(self.blogs.clone())
    }

    // ----- Articles -----

    pub fn create_article_handler(&self) -> CreateArticleHandler {
        CreateArticleHandler::new(self.articles.clone(), self.blogs.clone())
    }

    pub fn list_articles_handler(&self) -> ListArticlesHandler {
        ListArticlesHandler::new(self.articles.clone())
    }

    pub fn get_article_handler(&self) -> GetArticleHandler {
        GetArticleHandler::new(self.articles.clone())
    }

    pub fn update_article_handler(&self) -> UpdateArticleHandler {
        UpdateArticleHandler::new(self.articles.clone(), self.blogs.clone())
    }

    pub fn delete_article_handler(&self) -> DeleteArticleHandler {
        DeleteArticleHandler::new(self.articles.clone())
    }

    pub fn generate_draft_handler(&self) -> GenerateDraftHandler {
        GenerateDraftHandler::new(self.generator.clone(), self.blogs.clone())
    }

    // ----- Administration -----

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn set_user_role_handler(&self) -> SetUserRoleHandler {
        SetUserRoleHandler::new(self.users.clone())
    }

    pub fn delete_user_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }

    pub fn search_blogs_handler(&self) -> SearchBlogsHandler {
        SearchBlogsHandler::new(self.blogs.clone())
    }

    pub fn search_articles_handler(&self) -> SearchArticlesHandler {
        SearchArticlesHandler::new(self.articles.clone())
    }

    pub fn stats_handler(&self) -> GetStatsHandler {
        GetStatsHandler::new(self.users.clone(), self.blogs.clone(), self.articles.clone())
    }
}
