//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns. Records that
//! are created by the store come with a separate `New*` input struct that
//! carries everything except the store-assigned identifier.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - An alias mapped to a target URL
//! - [`Product`] / [`NewProduct`] - A catalog item belonging to a group
//! - [`ProductGroup`] / [`NewProductGroup`] - A named collection of products
//! - [`Page`] - One offset-based slice of a list plus the full row count

pub mod page;
pub mod product;
pub mod product_group;
pub mod short_link;

pub use page::Page;
pub use product::{NewProduct, Product};
pub use product_group::{NewProductGroup, ProductGroup};
pub use short_link::ShortLink;
