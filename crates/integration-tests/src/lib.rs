//! Shared fixtures for the integration tests.
//!
//! Everything runs against the in-memory store, so the suite needs no
//! database. Ids come from the real UUID generator.

use std::sync::Arc;

use auth_adapters::JwtTokenManager;
use domains::AuthenticatedUser;
use services::UseCases;
use storage_adapters::memory::UserRecord;
use storage_adapters::{
    InMemoryCommentRepository, InMemoryThreadRepository, MemoryStore, UuidIdGenerator,
};

pub const ACCESS_TOKEN_KEY: &[u8] = b"integration-access-key";

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub threads: Arc<InMemoryThreadRepository>,
    pub comments: Arc<InMemoryCommentRepository>,
    pub use_cases: UseCases,
    pub tokens: Arc<JwtTokenManager>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let threads =
            Arc::new(InMemoryThreadRepository::new(store.clone(), Arc::new(UuidIdGenerator)));
        let comments =
            Arc::new(InMemoryCommentRepository::new(store.clone(), Arc::new(UuidIdGenerator)));
        let use_cases = UseCases::new(threads.clone(), comments.clone());

        Self {
            store,
            threads,
            comments,
            use_cases,
            tokens: Arc::new(JwtTokenManager::new(ACCESS_TOKEN_KEY, 3000)),
        }
    }

    /// Registers a user and returns a valid access token for them.
    pub fn register(&self, id: &str, username: &str) -> String {
        self.store.insert_user(UserRecord {
            id: id.to_string(),
            username: username.to_string(),
            ..UserRecord::default()
        });
        self.tokens
            .issue(&AuthenticatedUser { id: id.to_string(), username: username.to_string() })
            .unwrap_or_else(|e| panic!("failed to issue test token: {e}"))
    }

    #[cfg(feature = "web-axum")]
    pub fn router(&self) -> axum::Router {
        let state = api_adapters::AppState::new(self.use_cases.clone(), self.tokens.clone());
        api_adapters::build_router(state)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "web-axum")]
pub mod http {
    //! Request builders and a one-shot sender for router tests.

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    pub fn request(
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        builder.body(body).unwrap_or_else(|e| panic!("invalid test request: {e}"))
    }

    /// Sends one request and decodes the JSON body (`Null` when empty).
    pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|e| panic!("unreadable response body: {e}"));
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("non-JSON response: {e}"))
        };
        (status, body)
    }
}
