use std::sync::Arc;

use async_trait::async_trait;
use domains::{
    payload_from, AddComment, AddedComment, CommentRepository, DomainError, IdGenerator, Payload,
    Result,
};
use serde_json::json;

use super::store::{CommentRecord, MemoryStore};
use crate::now_iso;

pub struct InMemoryCommentRepository {
    store: Arc<MemoryStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<MemoryStore>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { store, id_generator }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    #[tracing::instrument(skip_all, fields(thread_id = %comment.thread, owner = %comment.owner))]
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment> {
        if !self.store.threads.contains_key(&comment.thread) {
            return Err(super::foreign_key_violation("comments", "comments_thread_fkey"));
        }
        if !self.store.users.contains_key(&comment.owner) {
            return Err(super::foreign_key_violation("comments", "comments_owner_fkey"));
        }

        let record = CommentRecord {
            id: format!("comment-{}", self.id_generator.generate()),
            content: comment.content,
            created_at: now_iso(),
            is_delete: false,
            thread: comment.thread,
            owner: comment.owner,
        };
        let added = AddedComment {
            id: record.id.clone(),
            content: record.content.clone(),
            owner: record.owner.clone(),
        };
        self.store.comments.insert(record.id.clone(), record);

        Ok(added)
    }

    #[tracing::instrument(skip(self))]
    async fn check_availability_comment(&self, id: &str) -> Result<()> {
        if self.store.comments.contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::not_found("Gagal menghapus komentar, komentar tidak ditemukan"))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment(&self, id: &str) -> Result<()> {
        if let Some(mut comment) = self.store.comments.get_mut(id) {
            comment.is_delete = true;
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<()> {
        let owned = self.store.comments.get(id).is_some_and(|comment| comment.owner == owner);
        if owned {
            Ok(())
        } else {
            Err(DomainError::authorization("Gagal menghapus komentar, komentar bukan milik anda"))
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_comments_by_thread(&self, thread_id: &str) -> Result<Vec<Payload>> {
        let mut rows: Vec<CommentRecord> = self
            .store
            .comments
            .iter()
            .filter(|entry| entry.thread == thread_id)
            .map(|entry| entry.value().clone())
            .collect();
        // Ties on the timestamp fall back to id so the order is deterministic.
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        Ok(rows
            .into_iter()
            .map(|row| {
                // Left join: a comment whose author is gone keeps a null username.
                let username = self.store.username_of(&row.owner);
                payload_from(json!({
                    "id": row.id,
                    "username": username,
                    "date": row.created_at,
                    "content": row.content,
                    "is_delete": row.is_delete,
                }))
            })
            .collect())
    }
}
