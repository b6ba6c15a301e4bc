//! SQLite implementation of the product repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::db_error::{classify, internal};
use crate::domain::entities::{NewProduct, Page, Product};
use crate::domain::error::{StorageError, StorageResult};
use crate::domain::repositories::ProductRepository;

const ENTITY: &str = "product";

const PRODUCT_COLUMNS: &str = "id, title, price, description, image_url, weight, group_id, \
                               quantity, is_popular, composition";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    price: f64,
    description: Option<String>,
    image_url: String,
    weight: i64,
    group_id: i64,
    quantity: Option<i64>,
    is_popular: Option<bool>,
    composition: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            price: row.price,
            description: row.description,
            image_url: row.image_url,
            weight: row.weight,
            group_id: row.group_id,
            quantity: row.quantity,
            is_popular: row.is_popular,
            composition: row.composition,
        }
    }
}

/// SQLite repository for catalog products.
///
/// The `group_id` foreign key is enforced by SQLite (`PRAGMA foreign_keys`
/// is switched on for every pooled connection).
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn save(&self, new_product: NewProduct) -> StorageResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO products
                (title, price, description, image_url, weight, group_id,
                 quantity, is_popular, composition)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_product.title)
        .bind(new_product.price)
        .bind(&new_product.description)
        .bind(&new_product.image_url)
        .bind(new_product.weight)
        .bind(new_product.group_id)
        .bind(new_product.quantity)
        .bind(new_product.is_popular)
        .bind(&new_product.composition)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| classify("product.save", ENTITY, e))?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(internal("product.find_by_id"))?;

        row.map(Product::from)
            .ok_or_else(|| StorageError::not_found(ENTITY))
    }

    async fn list(&self, limit: i64, offset: i64) -> StorageResult<Page<Product>> {
        let mut tx = self.pool.begin().await.map_err(internal("product.list"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await
            .map_err(internal("product.list"))?;

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *tx)
        .await
        .map_err(internal("product.list"))?;

        tx.commit().await.map_err(internal("product.list"))?;

        Ok(Page::new(rows.into_iter().map(Product::from).collect(), total))
    }
}
