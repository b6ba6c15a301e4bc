//! SQLite implementation of the short link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use super::db_error::{classify, internal};
use crate::domain::error::{StorageError, StorageResult};
use crate::domain::repositories::ShortLinkRepository;

const ENTITY: &str = "short link";

/// SQLite repository for alias to URL mappings.
pub struct SqliteShortLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortLinkRepository for SqliteShortLinkRepository {
    async fn save(&self, target_url: &str, alias: &str) -> StorageResult<i64> {
        let result = sqlx::query("INSERT INTO short_links (alias, target_url) VALUES (?, ?)")
            .bind(alias)
            .bind(target_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| classify("short_link.save", ENTITY, e))?;

        Ok(result.last_insert_rowid())
    }

    async fn resolve(&self, alias: &str) -> StorageResult<String> {
        sqlx::query_scalar::<_, String>("SELECT target_url FROM short_links WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(internal("short_link.resolve"))?
            .ok_or_else(|| StorageError::not_found(ENTITY))
    }

    async fn delete(&self, alias: &str) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM short_links WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(internal("short_link.delete"))?;

        if result.rows_affected() == 0 {
            tracing::debug!(alias, "Delete matched no short link");
        }

        Ok(())
    }
}
