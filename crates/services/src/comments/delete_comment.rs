use std::sync::Arc;

use domains::{CommentRepository, Result, ThreadRepository};
use serde::Deserialize;

/// Identifies the comment to delete and who is asking.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentCommand {
    pub thread_id: String,
    pub comment_id: String,
    pub owner_id: String,
}

/// Soft-deletes a comment after checking thread, comment and ownership in that order.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self { thread_repository, comment_repository }
    }

    #[tracing::instrument(
        name = "delete_comment",
        skip_all,
        fields(thread_id = %command.thread_id, comment_id = %command.comment_id)
    )]
    pub async fn execute(&self, command: &DeleteCommentCommand) -> Result<()> {
        self.thread_repository.check_availability_thread(&command.thread_id).await?;
        self.comment_repository.check_availability_comment(&command.comment_id).await?;
        self.comment_repository
            .verify_comment_owner(&command.comment_id, &command.owner_id)
            .await
            .inspect_err(|_| {
                tracing::warn!(owner = %command.owner_id, "delete rejected, not the owner")
            })?;
        self.comment_repository.delete_comment(&command.comment_id).await?;

        tracing::info!("comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{DomainError, MockCommentRepository, MockThreadRepository};
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn command() -> DeleteCommentCommand {
        DeleteCommentCommand {
            thread_id: "thread-123".into(),
            comment_id: "comment-123".into(),
            owner_id: "user-123".into(),
        }
    }

    #[test]
    fn command_reads_camel_case_keys() {
        let command: DeleteCommentCommand = serde_json::from_value(serde_json::json!({
            "threadId": "thread-123",
            "commentId": "comment-123",
            "ownerId": "user-123",
        }))
        .unwrap();

        assert_eq!(command, self::command());
    }

    #[tokio::test]
    async fn orchestrates_delete_comment_in_order() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_check_availability_thread()
            .with(eq("thread-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_check_availability_comment()
            .with(eq("comment-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        comments
            .expect_verify_comment_owner()
            .with(eq("comment-123"), eq("user-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        comments
            .expect_delete_comment()
            .with(eq("comment-123"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        tokio_test::assert_ok!(use_case.execute(&command()).await);
    }

    #[tokio::test]
    async fn missing_thread_never_checks_comment() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_check_availability_thread()
            .returning(|_| Err(DomainError::not_found("Thread tidak ditemukan")));
        comments.expect_check_availability_comment().never();
        comments.expect_verify_comment_owner().never();
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(&command()).await.unwrap_err();

        assert_eq!(err, DomainError::not_found("Thread tidak ditemukan"));
    }

    #[tokio::test]
    async fn missing_comment_never_checks_owner() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads.expect_check_availability_thread().returning(|_| Ok(()));
        comments.expect_check_availability_comment().returning(|_| {
            Err(DomainError::not_found("Gagal menghapus komentar, komentar tidak ditemukan"))
        });
        comments.expect_verify_comment_owner().never();
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(&command()).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn foreign_comment_is_not_deleted() {
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads.expect_check_availability_thread().returning(|_| Ok(()));
        comments.expect_check_availability_comment().returning(|_| Ok(()));
        comments.expect_verify_comment_owner().returning(|_, _| {
            Err(DomainError::authorization("Gagal menghapus komentar, komentar bukan milik anda"))
        });
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(&command()).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::authorization("Gagal menghapus komentar, komentar bukan milik anda")
        );
    }
}
