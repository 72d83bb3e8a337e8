//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the services.

pub mod comment_repository;
pub mod id_generator;
pub mod thread_repository;
pub mod token_verifier;

pub use comment_repository::CommentRepository;
pub use id_generator::IdGenerator;
pub use thread_repository::ThreadRepository;
pub use token_verifier::{AccessTokenVerifier, AuthenticatedUser};

#[cfg(any(test, feature = "testing"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "testing"))]
pub use thread_repository::MockThreadRepository;
#[cfg(any(test, feature = "testing"))]
pub use token_verifier::MockAccessTokenVerifier;
