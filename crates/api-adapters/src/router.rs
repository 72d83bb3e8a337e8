use axum::body::Body;
use axum::http::Request;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{comments, health, threads};
use crate::metrics::{metrics_handler, track_requests};
use crate::state::AppState;

/// Builds the full application router.
///
/// Request ids are assigned (or kept, when the client sent `x-request-id`)
/// before tracing so every span carries one, and echoed on the response.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/threads", post(threads::post_thread))
        .route("/threads/{thread_id}", get(threads::get_thread))
        .route("/threads/{thread_id}/comments", post(comments::post_comment))
        .route("/threads/{thread_id}/comments/{comment_id}", delete(comments::delete_comment))
        .route("/health", get(health::health))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
