//! Request extractors whose rejections render as the JSON envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that rejects malformed payloads with [`AppError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parses a numeric path identifier.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request("invalid request", serde_json::json!({ "id": raw })))
}
