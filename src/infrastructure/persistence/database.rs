//! SQLite store initialization.
//!
//! [`Database`] owns the process-wide connection pool. It is opened once at
//! start-up, cloned into every component that needs storage, and never
//! stored in a global.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::error::{StorageError, StorageResult};

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Handle to the SQLite store shared by all repositories.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Opens or creates the store at `location` and ensures the schema exists.
    ///
    /// `location` is either a file path (`./storage/storage.db`) or a SQLx
    /// connection string (`sqlite://...`). `sqlite::memory:` and `:memory:`
    /// open the single-connection store of [`Database::in_memory`]. Missing
    /// parent directories of a file path are created. Schema creation is
    /// idempotent, so this is safe to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Initialization`] if the store cannot be opened
    /// or the schema cannot be applied.
    pub async fn connect(location: &str, settings: &PoolSettings) -> StorageResult<Self> {
        if is_in_memory(location) {
            let database = Self::in_memory().await?;
            tracing::info!(location, "In-memory storage ready");
            return Ok(database);
        }

        let options = connect_options(location).await?;

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::initialization("failed to open storage", e))?;

        let database = Self {
            pool: Arc::new(pool),
        };
        database.migrate().await?;

        tracing::info!(location, "Storage ready");
        Ok(database)
    }

    /// Opens a private in-memory store with the full schema.
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// every SQLite in-memory connection is a separate database.
    pub async fn in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::initialization("invalid storage location", e))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::initialization("failed to open storage", e))?;

        let database = Self {
            pool: Arc::new(pool),
        };
        database.migrate().await?;
        Ok(database)
    }

    /// Shared connection pool.
    pub fn pool(&self) -> Arc<SqlitePool> {
        self.pool.clone()
    }

    /// Runs a trivial statement to confirm the store answers.
    pub async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::internal("database.ping", e))?;
        Ok(())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn migrate(&self) -> StorageResult<()> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(|e| StorageError::initialization("failed to create schema", e))
    }
}

fn is_in_memory(location: &str) -> bool {
    matches!(location.trim(), "sqlite::memory:" | ":memory:" | "sqlite://:memory:")
}

/// Builds connection options for a path or connection string.
async fn connect_options(location: &str) -> StorageResult<SqliteConnectOptions> {
    let location = location.trim();
    if location.is_empty() {
        return Err(StorageError::Initialization {
            message: "storage location is empty".to_string(),
            source: None,
        });
    }

    let options = if location.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(location)
            .map_err(|e| StorageError::initialization("invalid storage location", e))?
    } else {
        ensure_parent_dir(Path::new(location)).await?;
        SqliteConnectOptions::new()
            .filename(location)
            .journal_mode(SqliteJournalMode::Wal)
    };

    Ok(options.create_if_missing(true).foreign_keys(true))
}

async fn ensure_parent_dir(path: &Path) -> StorageResult<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    tokio::fs::create_dir_all(parent).await.map_err(|e| {
        StorageError::initialization(
            format!("failed to create storage directory {}", parent.display()),
            e,
        )
    })
}
