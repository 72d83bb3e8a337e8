use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::{body_payload, AuthUser};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /threads
pub async fn post_thread(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Value>, ApiError> {
    let mut payload = body_payload(body)?;
    payload.insert("owner".into(), Value::String(user.id));

    let added_thread = state.use_cases.add_thread.execute(&payload).await?;

    Ok(ApiResponse::created(json!({ "addedThread": added_thread })))
}

/// GET /threads/{thread_id}
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<ApiResponse<Value>, ApiError> {
    let thread = state.use_cases.detail_thread.execute(&thread_id).await?;

    Ok(ApiResponse::success(json!({ "thread": thread })))
}
