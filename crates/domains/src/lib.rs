//! forum-api/crates/domains/src/lib.rs
//!
//! Entities, payload validation, and the port traits the services depend on.
//! No I/O lives here.

pub mod error;
pub mod models;
pub mod payload;
pub mod ports;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use payload::{payload_from, Payload};
pub use ports::*;
