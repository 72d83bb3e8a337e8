use std::sync::Arc;

use domains::AccessTokenVerifier;
use services::UseCases;

use crate::metrics::Metrics;

/// Shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub use_cases: UseCases,
    pub token_verifier: Arc<dyn AccessTokenVerifier>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(use_cases: UseCases, token_verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { use_cases, token_verifier, metrics: Arc::new(Metrics::new()) }
    }
}
