//! SQLite implementation of the product group repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::db_error::{classify, internal};
use crate::domain::entities::{NewProductGroup, Page, ProductGroup};
use crate::domain::error::{StorageError, StorageResult};
use crate::domain::repositories::ProductGroupRepository;

const ENTITY: &str = "product group";

#[derive(sqlx::FromRow)]
struct ProductGroupRow {
    id: i64,
    title: String,
    description: Option<String>,
}

impl From<ProductGroupRow> for ProductGroup {
    fn from(row: ProductGroupRow) -> Self {
        ProductGroup {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

/// SQLite repository for product groups.
pub struct SqliteProductGroupRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductGroupRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductGroupRepository for SqliteProductGroupRepository {
    async fn save(&self, new_group: NewProductGroup) -> StorageResult<i64> {
        let result = sqlx::query("INSERT INTO product_groups (title, description) VALUES (?, ?)")
            .bind(&new_group.title)
            .bind(&new_group.description)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| classify("product_group.save", ENTITY, e))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<ProductGroup> {
        let row = sqlx::query_as::<_, ProductGroupRow>(
            "SELECT id, title, description FROM product_groups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(internal("product_group.find_by_id"))?;

        row.map(ProductGroup::from)
            .ok_or_else(|| StorageError::not_found(ENTITY))
    }

    async fn list(&self, limit: i64, offset: i64) -> StorageResult<Page<ProductGroup>> {
        // Count and page share one read transaction so `total` describes the
        // same snapshot as `items`.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(internal("product_group.list"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_groups")
            .fetch_one(&mut *tx)
            .await
            .map_err(internal("product_group.list"))?;

        let rows = sqlx::query_as::<_, ProductGroupRow>(
            "SELECT id, title, description FROM product_groups ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *tx)
        .await
        .map_err(internal("product_group.list"))?;

        tx.commit().await.map_err(internal("product_group.list"))?;

        Ok(Page::new(
            rows.into_iter().map(ProductGroup::from).collect(),
            total,
        ))
    }
}
