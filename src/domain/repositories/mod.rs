//! Repository trait definitions for the domain layer.
//!
//! These traits are the storage engine's public contract. Implementations
//! live in `crate::infrastructure::persistence`; every method returns a
//! classified [`crate::domain::error::StorageError`] on failure.
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Alias to URL mappings
//! - [`ProductRepository`] - Catalog products
//! - [`ProductGroupRepository`] - Catalog product groups
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! integration tests in `tests/repository_*.rs` for the SQLite behaviour.

pub mod product_group_repository;
pub mod product_repository;
pub mod short_link_repository;

pub use product_group_repository::ProductGroupRepository;
pub use product_repository::ProductRepository;
pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use product_group_repository::MockProductGroupRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
