//! Uniform JSON response wrapper.
//!
//! Every response body, success or failure, carries a `status` field:
//!
//! ```json
//! { "status": "OK", "data": { ... } }
//! { "status": "Error", "error": "product not found" }
//! ```

use serde::Serialize;
use serde_json::Value;

/// Outcome indicator of an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Response wrapper carrying either a payload or an error description.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response with a payload.
    pub fn ok(data: T) -> Self {
        Self {
            status: Status::Ok,
            data: Some(data),
            error: None,
            details: None,
        }
    }
}

impl Envelope<()> {
    /// Successful response without a payload.
    pub fn empty() -> Self {
        Self {
            status: Status::Ok,
            data: None,
            error: None,
            details: None,
        }
    }

    /// Failed response. `details` is omitted when it is JSON `null`.
    pub fn error(message: impl Into<String>, details: Value) -> Self {
        Self {
            status: Status::Error,
            data: None,
            error: Some(message.into()),
            details: (!details.is_null()).then_some(details),
        }
    }
}
