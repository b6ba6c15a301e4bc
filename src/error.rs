//! HTTP-facing error type.
//!
//! [`AppError`] is what handlers and services return. It renders as the
//! uniform JSON envelope with `status: "Error"` and maps storage failures
//! onto status codes:
//!
//! | Source                                  | Status |
//! |-----------------------------------------|--------|
//! | `StorageError::NotFound`                | 404    |
//! | `StorageError::Conflict` / `Referential`| 400    |
//! | validation / decoding failures          | 400    |
//! | `StorageError::Internal` / other        | 500    |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::error::Error as _;
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::envelope::Envelope;
use crate::domain::error::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        (status, Json(Envelope::<()>::error(message, details))).into_response()
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        match &e {
            StorageError::NotFound { entity } => {
                AppError::not_found(e.to_string(), json!({ "entity": entity }))
            }
            StorageError::Conflict { entity, constraint } => AppError::bad_request(
                e.to_string(),
                json!({ "entity": entity, "constraint": constraint }),
            ),
            StorageError::Referential { entity } => {
                AppError::bad_request(e.to_string(), json!({ "entity": entity }))
            }
            StorageError::Internal { .. } | StorageError::Initialization { .. } => {
                tracing::error!(
                    error = %e,
                    cause = e.source().map(|s| s.to_string()),
                    "Storage failure"
                );
                AppError::internal("internal error", Value::Null)
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |err| (field.to_string(), err.code.to_string()))
            })
            .collect();
        fields.sort();
        fields.dedup();

        let message = fields
            .iter()
            .map(|(field, code)| describe_field_error(field, code))
            .collect::<Vec<_>>()
            .join(", ");

        let names: Vec<&str> = fields.iter().map(|(field, _)| field.as_str()).collect();

        AppError::bad_request(message, json!({ "fields": names }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::info!(reason = %rejection.body_text(), "Failed to decode request body");
        AppError::bad_request(
            "failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

fn describe_field_error(field: &str, code: &str) -> String {
    match code {
        "required" => format!("field {field} is a required field"),
        "url" => format!("field {field} is not a valid URL"),
        "range" => format!("field {field} is out of range"),
        "length" => format!("field {field} has invalid length"),
        _ => format!("field {field} is not valid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, code = "required"))]
        title: String,
        #[validate(url)]
        image_url: String,
    }

    #[test]
    fn test_storage_error_status_mapping() {
        let not_found: AppError = StorageError::not_found("product").into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict: AppError = StorageError::Conflict {
            entity: "short link",
            constraint: None,
        }
        .into();
        assert_eq!(conflict.status_code(), StatusCode::BAD_REQUEST);

        let referential: AppError = StorageError::Referential { entity: "product" }.into();
        assert_eq!(referential.status_code(), StatusCode::BAD_REQUEST);

        let internal: AppError = StorageError::internal("product.save", "disk full").into();
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.to_string(), "internal error");
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let sample = Sample {
            title: String::new(),
            image_url: "not a url".to_string(),
        };

        let err: AppError = sample.validate().unwrap_err().into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "field image_url is not a valid URL, field title is a required field"
        );
    }
}
