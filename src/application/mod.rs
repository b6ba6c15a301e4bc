//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API
//! returning [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and deletion
//! - [`services::product_service::ProductService`] - Catalog products
//! - [`services::product_group_service::ProductGroupService`] - Catalog product groups

pub mod services;
