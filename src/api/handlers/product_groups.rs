//! Handlers for product groups.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::pagination::{ListData, ListRequest};
use crate::api::dto::product_group::{ProductGroupItem, SaveProductGroupRequest};
use crate::api::extract::{AppJson, parse_id};
use crate::error::AppError;
use crate::state::AppState;

/// Saves a product group.
///
/// # Endpoint
///
/// `POST /productGroup/save`
pub async fn save_product_group_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveProductGroupRequest>,
) -> Result<Json<Envelope<ProductGroupItem>>, AppError> {
    payload.validate()?;

    let group = state
        .product_group_service
        .create_group(payload.into())
        .await?;

    Ok(Json(Envelope::ok(group.into())))
}

/// Reads a product group by id.
///
/// # Endpoint
///
/// `GET /productGroup/{id}`
pub async fn get_product_group_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<ProductGroupItem>>, AppError> {
    let id = parse_id(&id)?;
    let group = state.product_group_service.get_group(id).await?;

    Ok(Json(Envelope::ok(group.into())))
}

/// Lists product groups in ascending id order.
///
/// # Endpoint
///
/// `POST /productGroup/list`
pub async fn list_product_groups_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ListRequest>,
) -> Result<Json<Envelope<ListData<ProductGroupItem>>>, AppError> {
    payload.validate()?;

    let (limit, offset) = payload.limit_offset();
    let page = state
        .product_group_service
        .list_groups(limit, offset)
        .await?;

    Ok(Json(Envelope::ok(ListData::from_page(
        page,
        ProductGroupItem::from,
    ))))
}
