//! forum-api/crates/services/src/lib.rs
//!
//! Use cases. Each one is a short, fixed sequence of repository calls that
//! stops at the first failure.

pub mod comments;
pub mod threads;

use std::sync::Arc;

use domains::{CommentRepository, ThreadRepository};

pub use comments::{AddCommentUseCase, DeleteCommentCommand, DeleteCommentUseCase};
pub use threads::{AddThreadUseCase, DetailThreadUseCase};

/// Every use case, wired against one pair of repositories.
#[derive(Clone)]
pub struct UseCases {
    pub add_thread: Arc<AddThreadUseCase>,
    pub detail_thread: Arc<DetailThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
}

impl UseCases {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            add_thread: Arc::new(AddThreadUseCase::new(thread_repository.clone())),
            detail_thread: Arc::new(DetailThreadUseCase::new(
                thread_repository.clone(),
                comment_repository.clone(),
            )),
            add_comment: Arc::new(AddCommentUseCase::new(
                thread_repository.clone(),
                comment_repository.clone(),
            )),
            delete_comment: Arc::new(DeleteCommentUseCase::new(
                thread_repository,
                comment_repository,
            )),
        }
    }
}
