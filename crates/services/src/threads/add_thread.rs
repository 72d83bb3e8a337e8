use std::sync::Arc;

use domains::{AddThread, AddedThread, Payload, Result, ThreadRepository};

/// Opens a new thread on behalf of an authenticated user.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    /// `payload` carries `title`, `body` and the caller's id as `owner`.
    #[tracing::instrument(name = "add_thread", skip_all)]
    pub async fn execute(&self, payload: &Payload) -> Result<AddedThread> {
        let thread = AddThread::parse(payload)?;
        let added = self.thread_repository.add_thread(thread).await?;

        tracing::info!(thread_id = %added.id, owner = %added.owner, "thread created");
        Ok(added)
    }
}
