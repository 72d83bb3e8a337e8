//! Postgres repositories over a shared `sqlx::PgPool`.
//!
//! Rows are selected as JSON objects (`row_to_json`, `json_build_object`) and
//! handed to the entity parsers, so the column-to-field mapping lives in one
//! place per query.

mod comment_repository;
mod thread_repository;

pub use comment_repository::PostgresCommentRepository;
pub use thread_repository::PostgresThreadRepository;

use domains::DomainError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to connect to postgres: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Opens the connection pool shared by both repositories.
pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(StorageError::Connect)?;

    tracing::info!(max_connections, "postgres pool ready");
    Ok(pool)
}

/// Applies the bundled `users`, `threads` and `comments` migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("migrations applied");
    Ok(())
}

fn storage_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "postgres query failed");
    DomainError::internal(err.to_string())
}
