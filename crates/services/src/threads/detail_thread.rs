use std::sync::Arc;

use domains::{
    CommentRepository, DetailComment, Result, ThreadRepository, ThreadWithComments,
    ValidationError,
};

/// Reads a thread together with its comments, oldest first.
pub struct DetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DetailThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    #[tracing::instrument(name = "detail_thread", skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadWithComments> {
        self.thread_repository.check_availability_thread(thread_id).await?;
        let thread = self.thread_repository.get_detail_thread(thread_id).await?;
        let rows = self.comment_repository.get_comments_by_thread(thread_id).await?;

        // Soft-deleted content is swapped for the placeholder here.
        let comments = rows
            .iter()
            .map(DetailComment::parse)
            .collect::<std::result::Result<Vec<_>, ValidationError>>()
            .inspect_err(|err| tracing::error!(%err, "stored comment row failed validation"))?;

        Ok(thread.with_comments(comments))
    }
}
