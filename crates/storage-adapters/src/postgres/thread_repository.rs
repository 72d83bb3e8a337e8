use std::sync::Arc;

use async_trait::async_trait;
use domains::{
    AddThread, AddedThread, DetailThread, DomainError, IdGenerator, Payload, Result,
    ThreadRepository,
};
use sqlx::types::Json;
use sqlx::PgPool;

use super::storage_error;
use crate::now_iso;

pub struct PostgresThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    #[tracing::instrument(skip_all, fields(owner = %thread.owner))]
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread> {
        let id = format!("thread-{}", self.id_generator.generate());

        let Json(row): Json<Payload> = sqlx::query_scalar(
            "INSERT INTO threads (id, title, body, created_at, owner) VALUES ($1, $2, $3, $4, $5) \
             RETURNING json_build_object('id', id, 'title', title, 'owner', owner)",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(now_iso())
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(AddedThread::parse(&row)?)
    }

    #[tracing::instrument(skip(self))]
    async fn check_availability_thread(&self, id: &str) -> Result<()> {
        let found = sqlx::query("SELECT 1 FROM threads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Thread tidak ditemukan")),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_detail_thread(&self, id: &str) -> Result<DetailThread> {
        let row: Option<Json<Payload>> = sqlx::query_scalar(
            "SELECT row_to_json(t) FROM ( \
                SELECT threads.id, threads.title, threads.body, \
                       threads.created_at AS date, users.username \
                FROM threads INNER JOIN users ON users.id = threads.owner \
                WHERE threads.id = $1 \
             ) t",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        let Some(Json(row)) = row else {
            return Err(DomainError::not_found("Thread tidak ditemukan"));
        };
        Ok(DetailThread::parse(&row)?)
    }
}
