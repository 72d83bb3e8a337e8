use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

/// Success envelope: `{"status":"success","data":...}`.
///
/// `data` is omitted entirely for operations that return nothing.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data: Some(data), status_code: StatusCode::OK }
    }

    pub fn created(data: T) -> Self {
        Self { data: Some(data), status_code: StatusCode::CREATED }
    }
}

impl ApiResponse<()> {
    pub fn empty() -> Self {
        Self { data: None, status_code: StatusCode::OK }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let envelope = match self.data {
            Some(data) => json!({ "status": "success", "data": data }),
            None => json!({ "status": "success" }),
        };

        (self.status_code, Json(envelope)).into_response()
    }
}
