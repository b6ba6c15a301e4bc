//! Repository trait for short link data access.

use crate::domain::error::StorageResult;
use async_trait::async_trait;

/// Repository interface for alias to URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteShortLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Stores a new mapping and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Conflict`] if the alias is already taken.
    /// Returns [`StorageError::Internal`] on any other store failure.
    ///
    /// [`StorageError::Conflict`]: crate::domain::error::StorageError::Conflict
    /// [`StorageError::Internal`]: crate::domain::error::StorageError::Internal
    async fn save(&self, target_url: &str, alias: &str) -> StorageResult<i64>;

    /// Returns the target URL stored for `alias`, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no mapping exists.
    ///
    /// [`StorageError::NotFound`]: crate::domain::error::StorageError::NotFound
    async fn resolve(&self, alias: &str) -> StorageResult<String>;

    /// Deletes the mapping for `alias`.
    ///
    /// Idempotent: deleting an alias that does not exist succeeds. Callers
    /// that need "not found" semantics resolve first.
    async fn delete(&self, alias: &str) -> StorageResult<()>;
}
