//! forum-api/crates/storage-adapters/src/lib.rs
//!
//! Implementations of the repository ports: a Postgres backend behind the
//! `db-postgres` feature and an always-available in-memory backend.

pub mod id;
pub mod memory;
#[cfg(feature = "db-postgres")]
pub mod postgres;

pub use id::UuidIdGenerator;
pub use memory::{InMemoryCommentRepository, InMemoryThreadRepository, MemoryStore};

use chrono::{SecondsFormat, Utc};

/// Current time as stored in `created_at`, e.g. `2023-02-06T15:04:40.970Z`.
///
/// Millisecond precision with a `Z` suffix keeps lexical and chronological
/// order identical, which `ORDER BY created_at` relies on.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
