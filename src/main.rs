use anyhow::Result;
use dgn_core::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use dgn_core::config::AppConfig;
use dgn_core::domain::{
    article::{ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    comment::{CommentReadRepository, CommentWriteRepository},
    user::UserRepository,
};
use dgn_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleLikeRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresCategoryRepository,
        PostgresCommentReadRepository, PostgresCommentWriteRepository, PostgresUserRepository,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
};
use dgn_core::presentation::http::{
    middleware::rate_limit::WriteQuota,
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let article_like_repo: Arc<dyn ArticleLikeRepository> =
        Arc::new(PostgresArticleLikeRepository::new(pool.clone()));
    let comment_write_repo: Arc<dyn CommentWriteRepository> =
        Arc::new(PostgresCommentWriteRepository::new(pool.clone()));
    let comment_read_repo: Arc<dyn CommentReadRepository> =
        Arc::new(PostgresCommentReadRepository::new(pool));

    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::verifier(config.biscuit_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        category_repo,
        article_write_repo,
        article_read_repo,
        article_like_repo,
        comment_write_repo,
        comment_read_repo,
        token_manager,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router_with_options(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled().then(|| WriteQuota {
                period_secs: config.rate_limit_period_secs(),
                burst: config.rate_limit_burst(),
            }),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(rate_limit = config.rate_limit_enabled(), "listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
