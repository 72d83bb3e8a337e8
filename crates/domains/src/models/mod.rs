//! # Domain Models
//!
//! These structs represent the core entities of the forum.
//! Each is built through a `parse` function that validates a raw payload;
//! once constructed they are never mutated.

pub mod comment;
pub mod thread;

pub use comment::{AddComment, AddedComment, DetailComment, DELETED_COMMENT_PLACEHOLDER};
pub use thread::{AddThread, AddedThread, DetailThread, ThreadWithComments};
