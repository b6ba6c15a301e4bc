//! Business logic services for the application layer.

pub mod link_service;
pub mod product_group_service;
pub mod product_service;

pub use link_service::LinkService;
pub use product_group_service::ProductGroupService;
pub use product_service::ProductService;
