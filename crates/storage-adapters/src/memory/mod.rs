//! In-memory repositories over a shared [`MemoryStore`].
//!
//! They answer with the same messages, ordering and soft-delete rules as the
//! Postgres repositories, which lets the HTTP layer and the use cases be
//! exercised without a database.

mod comment_repository;
mod store;
mod thread_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use store::{CommentRecord, MemoryStore, ThreadRecord, UserRecord};
pub use thread_repository::InMemoryThreadRepository;

use domains::DomainError;

/// Same wording Postgres uses, so callers cannot tell the backends apart.
fn foreign_key_violation(table: &str, constraint: &str) -> DomainError {
    let err = DomainError::internal(format!(
        "insert or update on table \"{table}\" violates foreign key constraint \"{constraint}\""
    ));
    tracing::error!(error = %err, "memory store rejected insert");
    err
}
