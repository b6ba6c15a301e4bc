//! Product group catalog service.

use std::sync::Arc;

use crate::domain::entities::{NewProductGroup, Page, ProductGroup};
use crate::domain::repositories::ProductGroupRepository;
use crate::error::AppError;

/// Service for saving and reading product groups.
pub struct ProductGroupService<R: ProductGroupRepository> {
    repository: Arc<R>,
}

impl<R: ProductGroupRepository> ProductGroupService<R> {
    /// Creates a new product group service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Saves a product group and returns it with its assigned identifier.
    pub async fn create_group(&self, new_group: NewProductGroup) -> Result<ProductGroup, AppError> {
        let id = self.repository.save(new_group.clone()).await?;
        tracing::info!(id, "Product group saved");
        Ok(new_group.into_group(id))
    }

    /// Reads one product group.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no group has this id.
    pub async fn get_group(&self, id: i64) -> Result<ProductGroup, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Reads one page of product groups plus the total group count.
    pub async fn list_groups(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Page<ProductGroup>, AppError> {
        Ok(self.repository.list(limit, offset).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductGroupRepository;

    #[tokio::test]
    async fn test_create_group() {
        let mut repo = MockProductGroupRepository::new();
        repo.expect_save().times(1).returning(|_| Ok(1));

        let service = ProductGroupService::new(Arc::new(repo));
        let group = service
            .create_group(NewProductGroup {
                title: "Snacks".to_string(),
                description: Some(String::new()),
            })
            .await
            .unwrap();

        assert_eq!(group.id, 1);
        assert_eq!(group.title, "Snacks");
        assert_eq!(group.description.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_internal_failure_is_hidden() {
        let mut repo = MockProductGroupRepository::new();
        repo.expect_list().returning(|_, _| {
            Err(crate::domain::error::StorageError::internal(
                "product_group.list",
                "database is locked",
            ))
        });

        let service = ProductGroupService::new(Arc::new(repo));
        let err = service.list_groups(10, 0).await.unwrap_err();

        assert_eq!(err.to_string(), "internal error");
    }
}
