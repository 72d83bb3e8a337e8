//! forum-api/crates/api-adapters/src/lib.rs
//!
//! The HTTP surface of the forum: axum handlers, the bearer-token extractor,
//! the response envelope and the mapping from domain errors to status codes.
//! Everything lives behind the `web-axum` feature.

#[cfg(feature = "web-axum")]
pub mod error;
#[cfg(feature = "web-axum")]
pub mod extract;
#[cfg(feature = "web-axum")]
pub mod handlers;
#[cfg(feature = "web-axum")]
pub mod metrics;
#[cfg(feature = "web-axum")]
pub mod response;
#[cfg(feature = "web-axum")]
pub mod router;
#[cfg(feature = "web-axum")]
pub mod state;

#[cfg(feature = "web-axum")]
pub use error::ApiError;
#[cfg(feature = "web-axum")]
pub use metrics::Metrics;
#[cfg(feature = "web-axum")]
pub use router::build_router;
#[cfg(feature = "web-axum")]
pub use state::AppState;
