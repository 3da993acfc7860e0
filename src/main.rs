use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blogapp::adapters::ai::{GeminiConfig, GeminiProvider};
use blogapp::adapters::auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
use blogapp::adapters::http::{build_router, AppState};
use blogapp::adapters::memory::InMemoryStore;
use blogapp::adapters::postgres::{
    self, PostgresArticleRepository, PostgresBlogRepository, PostgresUserRepository,
};
use blogapp::config::{AppConfig, LogFormat, Storage};
use blogapp::ports::{ArticleRepository, BlogRepository, UserRepository};

type Repositories = (
    Arc<dyn UserRepository>,
    Arc<dyn BlogRepository>,
    Arc<dyn ArticleRepository>,
);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let (users, blogs, articles) = repositories(&config).await?;

    let api_key = config.ai.gemini_api_key.clone().unwrap_or_default();
    let mut generator = GeminiProvider::new(
        GeminiConfig::new(api_key)
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout()),
    )?;
    if config.ai.probe_on_startup {
        generator = generator.resolve_model().await?;
    }
    info!(model = generator.model(), "Gemini provider ready");

    let tokens = Arc::new(JwtTokenService::new(
        JwtConfig::new(config.auth.jwt_secret.clone(), config.auth.issuer.clone())
            .with_ttl(config.auth.token_ttl()),
    ));

    let state = AppState::new(
        users,
        blogs,
        articles,
        Arc::new(generator),
        Arc::new(Argon2PasswordHasher::new()),
        tokens.clone(),
        tokens,
        config.auth.admin_username.clone(),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.server.log_format() {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

async fn repositories(config: &AppConfig) -> Result<Repositories, Box<dyn std::error::Error>> {
    let Storage::Postgres(url) = config.database.storage() else {
        tracing::warn!("No database URL configured; data will not survive a restart");
        let store = Arc::new(InMemoryStore::new());
        let users: Arc<dyn UserRepository> = store.clone();
        let blogs: Arc<dyn BlogRepository> = store.clone();
        let articles: Arc<dyn ArticleRepository> = store;
        return Ok((users, blogs, articles));
    };

    let pool = postgres::connect(url, &config.database).await?;
    info!("Using PostgreSQL storage");
    let users: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let blogs: Arc<dyn BlogRepository> = Arc::new(PostgresBlogRepository::new(pool.clone()));
    let articles: Arc<dyn ArticleRepository> = Arc::new(PostgresArticleRepository::new(pool));
    Ok((users, blogs, articles))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
