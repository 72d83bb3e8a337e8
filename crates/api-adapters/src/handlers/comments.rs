use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use services::DeleteCommentCommand;

use crate::error::ApiError;
use crate::extract::{body_payload, AuthUser};
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /threads/{thread_id}/comments
pub async fn post_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(thread_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<ApiResponse<Value>, ApiError> {
    let mut payload = body_payload(body)?;
    // Path and identity win over anything the client put in the body.
    payload.insert("thread".into(), Value::String(thread_id));
    payload.insert("owner".into(), Value::String(user.id));

    let added_comment = state.use_cases.add_comment.execute(&payload).await?;

    Ok(ApiResponse::created(json!({ "addedComment": added_comment })))
}

/// DELETE /threads/{thread_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<ApiResponse<()>, ApiError> {
    let command = DeleteCommentCommand { thread_id, comment_id, owner_id: user.id };
    state.use_cases.delete_comment.execute(&command).await?;

    Ok(ApiResponse::empty())
}
