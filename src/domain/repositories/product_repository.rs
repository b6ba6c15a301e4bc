//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Page, Product};
use crate::domain::error::StorageResult;
use async_trait::async_trait;

/// Repository interface for catalog products.
///
/// Products are insert-only: there is no update or delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a product and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Referential` if `group_id` names no product group.
    /// Returns `StorageError::Internal` on any other store failure.
    async fn save(&self, new_product: NewProduct) -> StorageResult<i64>;

    /// Finds a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no product has this id.
    async fn find_by_id(&self, id: i64) -> StorageResult<Product>;

    /// Returns products in ascending id order together with the total count.
    ///
    /// `limit` is used as a literal SQL bound. An `offset` past the end yields
    /// an empty page, never an error.
    async fn list(&self, limit: i64, offset: i64) -> StorageResult<Page<Product>>;
}
