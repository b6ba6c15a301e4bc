//! # Shortlink Catalog
//!
//! A URL shortener and a small product catalog served over HTTP, backed by
//! SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits and the storage error taxonomy
//! - **Application Layer** ([`application`]) - Services orchestrating one storage call each
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and repository implementations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short links with custom or generated aliases, resolved by `302` redirect
//! - Products and product groups with paginated listing
//! - Uniform JSON envelope `{ "status": "OK" | "Error", ... }` on every response
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! cargo run
//! ```
//!
//! The schema is created on first start.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ProductGroupService, ProductService};
    pub use crate::domain::entities::{
        NewProduct, NewProductGroup, Page, Product, ProductGroup, ShortLink,
    };
    pub use crate::domain::error::StorageError;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{Database, PoolSettings};
    pub use crate::state::AppState;
}
