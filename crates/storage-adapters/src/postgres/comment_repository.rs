use std::sync::Arc;

use async_trait::async_trait;
use domains::{
    AddComment, AddedComment, CommentRepository, DomainError, IdGenerator, Payload, Result,
};
use sqlx::types::Json;
use sqlx::PgPool;

use super::storage_error;
use crate::now_iso;

pub struct PostgresCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    #[tracing::instrument(skip_all, fields(thread_id = %comment.thread, owner = %comment.owner))]
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        let id = format!("comment-{}", self.id_generator.generate());

        let Json(row): Json<Payload> = sqlx::query_scalar(
            "INSERT INTO comments (id, content, created_at, is_delete, thread, owner) \
             VALUES ($1, $2, $3, FALSE, $4, $5) \
             RETURNING json_build_object('id', id, 'content', content, 'owner', owner)",
        )
        .bind(&id)
        .bind(&comment.content)
        .bind(now_iso())
        .bind(&comment.thread)
        .bind(&comment.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(AddedComment::parse(&row)?)
    }

    #[tracing::instrument(skip(self))]
    async fn check_availability_comment(&self, id: &str) -> Result<()> {
        let found = sqlx::query("SELECT 1 FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match found {
            Some(_) => Ok(()),
            None => {
                Err(DomainError::not_found("Gagal menghapus komentar, komentar tidak ditemukan"))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment(&self, id: &str) -> Result<()> {
        sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<()> {
        let found = sqlx::query("SELECT 1 FROM comments WHERE id = $1 AND owner = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        match found {
            Some(_) => Ok(()),
            None => Err(DomainError::authorization(
                "Gagal menghapus komentar, komentar bukan milik anda",
            )),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_comments_by_thread(&self, thread_id: &str) -> Result<Vec<Payload>> {
        let rows: Vec<Json<Payload>> = sqlx::query_scalar(
            "SELECT row_to_json(t) FROM ( \
                SELECT comments.id, users.username, comments.created_at AS date, \
                       comments.content, comments.is_delete \
                FROM comments LEFT JOIN users ON users.id = comments.owner \
                WHERE comments.thread = $1 \
             ) t \
             ORDER BY t.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }
}
