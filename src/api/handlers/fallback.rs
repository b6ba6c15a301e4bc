//! Handlers for requests that match no route.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::Value;

use crate::api::dto::envelope::Envelope;
use crate::error::AppError;

/// Answers a path that matches no route.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("not found", Value::Null)
}

/// Answers a known path requested with an unsupported method.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::<()>::error("method not allowed", Value::Null)),
    )
}
