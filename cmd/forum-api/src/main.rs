//! # forum-api
//!
//! The entry point that assembles the application from configuration and
//! compile-time features.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::{build_router, AppState};
use auth_adapters::JwtTokenManager;
use configs::{AppConfig, DatabaseConfig, LogConfig, LogFormat, StorageBackend};
use domains::{AuthenticatedUser, CommentRepository, IdGenerator, ThreadRepository};
use secrecy::ExposeSecret;
use services::UseCases;
use storage_adapters::memory::UserRecord;
use storage_adapters::{
    InMemoryCommentRepository, InMemoryThreadRepository, MemoryStore, UuidIdGenerator,
};
use tracing_subscriber::EnvFilter;

type Repositories = (Arc<dyn ThreadRepository>, Arc<dyn CommentRepository>);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log)?;

    let tokens = Arc::new(JwtTokenManager::new(
        config.auth.access_token_key.expose_secret().as_bytes(),
        config.auth.access_token_age_secs,
    ));
    let (threads, comments) = build_repositories(&config.database, &tokens).await?;

    let state = AppState::new(UseCases::new(threads, comments), tokens);
    let router = build_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, backend = ?config.database.backend, "forum-api listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("forum-api stopped");
    Ok(())
}

fn init_tracing(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .with_context(|| format!("invalid log filter `{}`", log.filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
    .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

async fn build_repositories(
    database: &DatabaseConfig,
    tokens: &JwtTokenManager,
) -> anyhow::Result<Repositories> {
    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);

    match database.backend {
        StorageBackend::Postgres => postgres_repositories(database, id_generator).await,
        StorageBackend::Memory => {
            let store = Arc::new(MemoryStore::new());
            seed_demo_user(&store, tokens)?;
            Ok((
                Arc::new(InMemoryThreadRepository::new(store.clone(), id_generator.clone())),
                Arc::new(InMemoryCommentRepository::new(store, id_generator)),
            ))
        }
    }
}

#[cfg(feature = "db-postgres")]
async fn postgres_repositories(
    database: &DatabaseConfig,
    id_generator: Arc<dyn IdGenerator>,
) -> anyhow::Result<Repositories> {
    use storage_adapters::postgres::{
        self, PostgresCommentRepository, PostgresThreadRepository,
    };

    let url = database.url.as_ref().context("database.url is not set")?;
    let pool = postgres::connect(url.expose_secret(), database.max_connections).await?;
    if database.run_migrations {
        postgres::run_migrations(&pool).await?;
    }

    Ok((
        Arc::new(PostgresThreadRepository::new(pool.clone(), id_generator.clone())),
        Arc::new(PostgresCommentRepository::new(pool, id_generator)),
    ))
}

#[cfg(not(feature = "db-postgres"))]
async fn postgres_repositories(
    _database: &DatabaseConfig,
    _id_generator: Arc<dyn IdGenerator>,
) -> anyhow::Result<Repositories> {
    anyhow::bail!("postgres backend requested but forum-api was built without `db-postgres`")
}

/// The memory backend starts empty, so it gets one user to post as.
fn seed_demo_user(store: &MemoryStore, tokens: &JwtTokenManager) -> anyhow::Result<()> {
    let user = AuthenticatedUser { id: "user-demo".into(), username: "demo".into() };
    store.insert_user(UserRecord {
        id: user.id.clone(),
        username: user.username.clone(),
        password: auth_adapters::hash_password("demo")?,
        fullname: "Demo User".into(),
    });

    let token = tokens.issue(&user)?;
    tracing::warn!(
        username = %user.username,
        access_token = %token,
        "memory backend: demo user ready"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
