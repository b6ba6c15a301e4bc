//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Answers `302 Found` with the stored URL in `Location`, unmodified.
///
/// # Errors
///
/// Returns 404 Not Found if the alias does not exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.resolve(&alias).await?;
    tracing::debug!(alias = %alias, target_url = %target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]))
}
