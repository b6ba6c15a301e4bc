//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries against one shared [`Database`] pool.
//!
//! # Repositories
//!
//! - [`SqliteShortLinkRepository`] - Alias to URL mappings
//! - [`SqliteProductRepository`] - Catalog products
//! - [`SqliteProductGroupRepository`] - Catalog product groups
//!
//! Failures are translated into `StorageError` by [`db_error::classify`].

pub mod database;
pub mod db_error;
pub mod sqlite_product_group_repository;
pub mod sqlite_product_repository;
pub mod sqlite_short_link_repository;

pub use database::{Database, PoolSettings};
pub use sqlite_product_group_repository::SqliteProductGroupRepository;
pub use sqlite_product_repository::SqliteProductRepository;
pub use sqlite_short_link_repository::SqliteShortLinkRepository;
