use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AddComment, AddedComment};
use crate::payload::Payload;

/// Persistence contract for comments.
///
/// `check_availability_comment` must run before `verify_comment_owner` so a
/// missing comment and a foreign comment stay distinguishable to the caller.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment>;

    /// `DomainError::NotFound` when no comment has this id.
    async fn check_availability_comment(&self, id: &str) -> Result<()>;

    /// Soft delete. Deleting an already deleted comment is not an error.
    async fn delete_comment(&self, id: &str) -> Result<()>;

    /// `DomainError::Authorization` unless `owner` wrote the comment.
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<()>;

    /// Raw rows (`id, username, date, content, is_delete`), oldest first.
    /// Deleted comments are included; redaction happens in `DetailComment`.
    async fn get_comments_by_thread(&self, thread_id: &str) -> Result<Vec<Payload>>;
}
