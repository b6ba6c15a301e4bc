//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, get_product_group_handler, get_product_handler, health_handler,
    list_product_groups_handler, list_products_handler, method_not_allowed_handler,
    not_found_handler, redirect_handler, save_link_handler, save_product_group_handler,
    save_product_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /{alias}`             - Redirect to the aliased URL
/// - `POST   /url`                 - Create a short link
/// - `DELETE /url/{alias}`         - Delete a short link
/// - `POST   /product/save`        - Save a product
/// - `GET    /product/{id}`        - Read a product
/// - `POST   /product/list`        - List products
/// - `POST   /productGroup/save`   - Save a product group
/// - `GET    /productGroup/{id}`   - Read a product group
/// - `POST   /productGroup/list`   - List product groups
/// - `GET    /health`              - Storage health check
///
/// Unknown paths answer 404 and unsupported methods 405, both in the error
/// envelope.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/url", post(save_link_handler))
        .route("/url/{alias}", delete(delete_link_handler))
        .route("/product/save", post(save_product_handler))
        .route("/product/list", post(list_products_handler))
        .route("/product/{id}", get(get_product_handler))
        .route("/productGroup/save", post(save_product_group_handler))
        .route("/productGroup/list", post(list_product_groups_handler))
        .route("/productGroup/{id}", get(get_product_group_handler))
        .route("/{alias}", get(redirect_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
}
