//! Repository trait for product group data access.

use crate::domain::entities::{NewProductGroup, Page, ProductGroup};
use crate::domain::error::StorageResult;
use async_trait::async_trait;

/// Repository interface for catalog product groups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGroupRepository: Send + Sync {
    /// Inserts a product group and returns its identifier.
    async fn save(&self, new_group: NewProductGroup) -> StorageResult<i64>;

    /// Finds a product group by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no group has this id.
    async fn find_by_id(&self, id: i64) -> StorageResult<ProductGroup>;

    /// Returns groups in ascending id order together with the total count.
    async fn list(&self, limit: i64, offset: i64) -> StorageResult<Page<ProductGroup>>;
}
