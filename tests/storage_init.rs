use shortlink_catalog::domain::error::StorageError;
use shortlink_catalog::infrastructure::persistence::{Database, PoolSettings};

#[tokio::test]
async fn test_connect_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("storage.db");

    let database = Database::connect(path.to_str().unwrap(), &PoolSettings::default())
        .await
        .unwrap();

    assert!(path.exists());
    database.ping().await.unwrap();
}

#[tokio::test]
async fn test_reconnect_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");
    let location = path.to_str().unwrap();

    let first = Database::connect(location, &PoolSettings::default())
        .await
        .unwrap();
    sqlx::query("INSERT INTO product_groups (title) VALUES ('Snacks')")
        .execute(first.pool().as_ref())
        .await
        .unwrap();
    first.close().await;

    // Schema creation must be idempotent on a second start.
    let second = Database::connect(location, &PoolSettings::default())
        .await
        .unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_groups")
        .fetch_one(second.pool().as_ref())
        .await
        .unwrap();

    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_connect_with_connection_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");
    let location = format!("sqlite://{}", path.display());

    let database = Database::connect(&location, &PoolSettings::default())
        .await
        .unwrap();

    database.ping().await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn test_unusable_location_is_initialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain-file");
    std::fs::write(&file, b"not a directory").unwrap();

    // A regular file cannot act as a parent directory.
    let path = file.join("storage.db");
    let result = Database::connect(path.to_str().unwrap(), &PoolSettings::default()).await;

    assert!(matches!(result, Err(StorageError::Initialization { .. })));
}
