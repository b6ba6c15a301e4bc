//! Handlers for short link management (create, delete).

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::link::{SaveLinkRequest, SaveLinkResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "abc" }
/// ```
///
/// `alias` is optional; when omitted or empty a random one is generated.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed, the alias is
/// invalid or reserved, or the alias already exists.
pub async fn save_link_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveLinkRequest>,
) -> Result<Json<Envelope<SaveLinkResponse>>, AppError> {
    payload.validate()?;

    let SaveLinkRequest { url, alias } = payload;
    let link = state
        .link_service
        .create_short_link(url.unwrap_or_default(), alias)
        .await?;

    Ok(Json(Envelope::ok(SaveLinkResponse { alias: link.alias })))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Deleting an alias that does not exist succeeds.
pub async fn delete_link_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<()>>, AppError> {
    state.link_service.delete(&alias).await?;
    Ok(Json(Envelope::empty()))
}
