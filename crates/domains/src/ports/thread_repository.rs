use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AddThread, AddedThread, DetailThread};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a new thread and returns only its `id, title, owner` projection.
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread>;

    /// Succeeds silently when the thread exists; `DomainError::NotFound` otherwise.
    async fn check_availability_thread(&self, id: &str) -> Result<()>;

    /// Thread projection joined with the owner's username.
    async fn get_detail_thread(&self, id: &str) -> Result<DetailThread>;
}
