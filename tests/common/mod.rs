#![allow(dead_code)]

use shortlink_catalog::domain::entities::NewProduct;
use shortlink_catalog::infrastructure::persistence::{Database, PoolSettings};
use shortlink_catalog::state::AppState;
use tempfile::TempDir;

/// Opens a fresh file-backed store inside a temporary directory.
///
/// The directory is removed when the returned guard is dropped, so keep it
/// alive for the duration of the test.
pub async fn create_test_database() -> (Database, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");

    let database = Database::connect(path.to_str().unwrap(), &PoolSettings::default())
        .await
        .unwrap();

    (database, dir)
}

pub async fn create_test_state() -> (AppState, TempDir) {
    let (database, dir) = create_test_database().await;
    (AppState::new(&database), dir)
}

pub async fn create_test_group(database: &Database, title: &str) -> i64 {
    sqlx::query("INSERT INTO product_groups (title, description) VALUES (?, '')")
        .bind(title)
        .execute(database.pool().as_ref())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn create_test_link(database: &Database, alias: &str, url: &str) {
    sqlx::query("INSERT INTO short_links (alias, target_url) VALUES (?, ?)")
        .bind(alias)
        .bind(url)
        .execute(database.pool().as_ref())
        .await
        .unwrap();
}

pub fn sample_product(title: &str, group_id: i64) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        price: 2.5,
        description: None,
        image_url: "http://x/y.png".to_string(),
        weight: 100,
        group_id,
        ..Default::default()
    }
}
