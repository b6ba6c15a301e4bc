//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod health;
pub mod links;
pub mod product_groups;
pub mod products;
pub mod redirect;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use links::{delete_link_handler, save_link_handler};
pub use product_groups::{
    get_product_group_handler, list_product_groups_handler, save_product_group_handler,
};
pub use products::{get_product_handler, list_products_handler, save_product_handler};
pub use redirect::redirect_handler;
