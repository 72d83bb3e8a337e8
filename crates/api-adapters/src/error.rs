//! Domain errors rendered as HTTP responses.
//!
//! Client mistakes answer `{"status":"fail","message":...}` with a 4xx code.
//! Anything else is logged and answered with a generic 500 body so storage
//! details never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::{DomainError, ValidationError};
use serde_json::json;
use thiserror::Error;

const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The body could not be read as JSON.
    #[error("{0}")]
    InvalidBody(String),
}

/// User-facing message for a validation code, if it is one a client can cause.
///
/// Codes without a translation come from stored rows failing a projection.
pub fn translate_validation(err: &ValidationError) -> Option<&'static str> {
    match err.code().as_str() {
        "ADD_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => Some("Data yang anda masukkan tidak lengkap"),
        "ADD_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            Some("Data yang anda masukkan kurang tepat")
        }
        "ADD_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => Some("Masukkan isi komentar terlebih dahulu"),
        "ADD_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            Some("Masukkan isi komentar dengan benar")
        }
        _ => None,
    }
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "status": "fail", "message": message }))).into_response()
}

fn server_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "message": SERVER_FAILURE_MESSAGE })),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Domain(DomainError::Validation(err)) => match translate_validation(&err) {
                Some(message) => fail(StatusCode::BAD_REQUEST, message),
                None => {
                    tracing::error!(
                        code = %err,
                        property = %err.property,
                        "untranslated validation error"
                    );
                    server_failure()
                }
            },
            ApiError::Domain(DomainError::NotFound(message)) => {
                fail(StatusCode::NOT_FOUND, &message)
            }
            ApiError::Domain(DomainError::Authorization(message)) => {
                fail(StatusCode::FORBIDDEN, &message)
            }
            ApiError::Domain(DomainError::Unauthenticated(message)) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "statusCode": 401, "error": "Unauthorized", "message": message })),
            )
                .into_response(),
            ApiError::Domain(DomainError::Internal(cause)) => {
                tracing::error!(%cause, "request failed");
                server_failure()
            }
            ApiError::InvalidBody(message) => fail(StatusCode::BAD_REQUEST, &message),
        }
    }
}
