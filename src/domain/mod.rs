//! Domain layer containing business entities and storage contracts.
//!
//! Defines the records served by the service, the repository traits the
//! storage engine implements, and the storage error taxonomy. Nothing in this
//! layer depends on SQLx or Axum.
//!
//! # Architecture
//!
//! - [`entities`] - Short links, products, product groups and pages
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - [`error::StorageError`], the only error type storage returns

pub mod entities;
pub mod error;
pub mod repositories;
