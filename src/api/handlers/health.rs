//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::envelope::{Envelope, Status};
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store answers
/// - **503 Service Unavailable**: store ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "data": {
///     "status": "healthy",
///     "version": "0.1.0",
///     "checks": { "database": { "status": "ok" } }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Envelope<HealthResponse>>) {
    let database = check_database(&state).await;
    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    if healthy {
        (StatusCode::OK, Json(Envelope::ok(response)))
    } else {
        let mut envelope = Envelope::ok(response);
        envelope.status = Status::Error;
        envelope.error = Some("storage unavailable".to_string());
        (StatusCode::SERVICE_UNAVAILABLE, Json(envelope))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.database.ping().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Health check: storage ping failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(e.to_string()),
            }
        }
    }
}
