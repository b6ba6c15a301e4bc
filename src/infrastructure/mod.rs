//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite store initialization and repository implementations

pub mod persistence;
