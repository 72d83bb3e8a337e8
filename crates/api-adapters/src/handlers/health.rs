use serde_json::{json, Value};

use crate::response::ApiResponse;

/// GET /health
pub async fn health() -> ApiResponse<Value> {
    ApiResponse::success(json!({ "status": "ok" }))
}
