//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, ProductGroupService, ProductService};
use crate::infrastructure::persistence::{
    Database, SqliteProductGroupRepository, SqliteProductRepository, SqliteShortLinkRepository,
};

/// Services wired to the SQLite repositories, plus the store handle for
/// health checks.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub link_service: Arc<LinkService<SqliteShortLinkRepository>>,
    pub product_service: Arc<ProductService<SqliteProductRepository>>,
    pub product_group_service: Arc<ProductGroupService<SqliteProductGroupRepository>>,
}

impl AppState {
    /// Builds every service on top of one shared store.
    pub fn new(database: &Database) -> Self {
        let pool = database.pool();

        let link_repository = Arc::new(SqliteShortLinkRepository::new(pool.clone()));
        let product_repository = Arc::new(SqliteProductRepository::new(pool.clone()));
        let product_group_repository = Arc::new(SqliteProductGroupRepository::new(pool));

        Self {
            database: database.clone(),
            link_service: Arc::new(LinkService::new(link_repository)),
            product_service: Arc::new(ProductService::new(product_repository)),
            product_group_service: Arc::new(ProductGroupService::new(product_group_repository)),
        }
    }
}
