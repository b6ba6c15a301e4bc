//! Handlers for catalog products.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::pagination::{ListData, ListRequest};
use crate::api::dto::product::{ProductItem, SaveProductRequest};
use crate::api::extract::{AppJson, parse_id};
use crate::error::AppError;
use crate::state::AppState;

/// Saves a product.
///
/// # Endpoint
///
/// `POST /product/save`
///
/// # Errors
///
/// Returns 400 Bad Request if a required field is missing, a numeric field
/// does not parse, `imgUrl` is not a URL, or `groupId` names no group.
pub async fn save_product_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SaveProductRequest>,
) -> Result<Json<Envelope<ProductItem>>, AppError> {
    payload.validate()?;

    let product = state
        .product_service
        .create_product(payload.into_new_product())
        .await?;

    Ok(Json(Envelope::ok(product.into())))
}

/// Reads a product by id.
///
/// # Endpoint
///
/// `GET /product/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 404 Not Found if no product has this id.
pub async fn get_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<ProductItem>>, AppError> {
    let id = parse_id(&id)?;
    let product = state.product_service.get_product(id).await?;

    Ok(Json(Envelope::ok(product.into())))
}

/// Lists products in ascending id order.
///
/// # Endpoint
///
/// `POST /product/list`
///
/// # Request Body
///
/// ```json
/// { "limit": 25, "offset": 0 }
/// ```
///
/// `count` in the response is the total number of products.
pub async fn list_products_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ListRequest>,
) -> Result<Json<Envelope<ListData<ProductItem>>>, AppError> {
    payload.validate()?;

    let (limit, offset) = payload.limit_offset();
    let page = state.product_service.list_products(limit, offset).await?;

    Ok(Json(Envelope::ok(ListData::from_page(
        page,
        ProductItem::from,
    ))))
}
