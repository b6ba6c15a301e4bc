//! Product catalog service.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Page, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service for saving and reading catalog products.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Saves a product and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the product group does not exist.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let id = self.repository.save(new_product.clone()).await?;
        tracing::info!(id, group_id = new_product.group_id, "Product saved");
        Ok(new_product.into_product(id))
    }

    /// Reads one product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has this id.
    pub async fn get_product(&self, id: i64) -> Result<Product, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Reads one page of products plus the total product count.
    pub async fn list_products(&self, limit: i64, offset: i64) -> Result<Page<Product>, AppError> {
        Ok(self.repository.list(limit, offset).await?)
    }
}
