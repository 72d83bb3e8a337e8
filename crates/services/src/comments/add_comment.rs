use std::sync::Arc;

use domains::{AddComment, AddedComment, CommentRepository, Payload, Result, ThreadRepository};
use serde_json::Value;

/// Posts a comment on an existing thread.
pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    /// `payload` carries `content`, the target `thread` id and the caller as `owner`.
    ///
    /// The thread is checked before the payload is validated, so a comment on
    /// a missing thread reports `NotFound` even when its content is empty.
    #[tracing::instrument(name = "add_comment", skip_all)]
    pub async fn execute(&self, payload: &Payload) -> Result<AddedComment> {
        if let Some(Value::String(thread_id)) = payload.get("thread") {
            self.thread_repository.check_availability_thread(thread_id).await?;
        }

        let comment = AddComment::parse(payload)?;
        let added = self.comment_repository.add_comment(comment).await?;

        tracing::info!(comment_id = %added.id, owner = %added.owner, "comment created");
        Ok(added)
    }
}
