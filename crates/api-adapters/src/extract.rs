use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use domains::{payload_from, AuthenticatedUser, DomainError, Payload};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller behind `Authorization: Bearer <token>`.
///
/// Rejects with 401 before any body is read.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| DomainError::unauthenticated("Missing authentication"))?;

        let user = state.token_verifier.verify(token)?;
        Ok(AuthUser(user))
    }
}

/// Turns a JSON body into a use case payload.
///
/// A request without a JSON content type, or whose JSON is not an object,
/// yields an empty payload and leaves the complaint to validation.
pub fn body_payload(body: Result<Json<Value>, JsonRejection>) -> Result<Payload, ApiError> {
    match body {
        Ok(Json(value)) => Ok(payload_from(value)),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Payload::new()),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable request body");
            Err(ApiError::InvalidBody("Invalid request payload JSON format".to_string()))
        }
    }
}
