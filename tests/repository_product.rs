mod common;

use shortlink_catalog::domain::entities::NewProduct;
use shortlink_catalog::domain::error::StorageError;
use shortlink_catalog::domain::repositories::ProductRepository;
use shortlink_catalog::infrastructure::persistence::SqliteProductRepository;

#[tokio::test]
async fn test_save_and_find_exact_fields() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    let id = repo
        .save(common::sample_product("Chips", group_id))
        .await
        .unwrap();
    assert_eq!(id, 1);

    let product = repo.find_by_id(id).await.unwrap();
    assert_eq!(product.id, 1);
    assert_eq!(product.title, "Chips");
    assert_eq!(product.price, 2.5);
    assert_eq!(product.description, None);
    assert_eq!(product.image_url, "http://x/y.png");
    assert_eq!(product.weight, 100);
    assert_eq!(product.group_id, group_id);
}

#[tokio::test]
async fn test_price_keeps_full_precision() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    let mut new_product = common::sample_product("Precise", group_id);
    new_product.price = 0.1 + 0.2;
    let id = repo.save(new_product).await.unwrap();

    assert_eq!(repo.find_by_id(id).await.unwrap().price, 0.1 + 0.2);
}

#[tokio::test]
async fn test_optional_attributes_round_trip() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    let id = repo
        .save(NewProduct {
            description: Some("Salted".to_string()),
            quantity: Some(12),
            is_popular: Some(true),
            composition: Some("potato, salt".to_string()),
            ..common::sample_product("Chips", group_id)
        })
        .await
        .unwrap();

    let product = repo.find_by_id(id).await.unwrap();
    assert_eq!(product.description.as_deref(), Some("Salted"));
    assert_eq!(product.quantity, Some(12));
    assert_eq!(product.is_popular, Some(true));
    assert_eq!(product.composition.as_deref(), Some("potato, salt"));
}

#[tokio::test]
async fn test_unknown_group_is_referential() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductRepository::new(database.pool());

    let err = repo
        .save(common::sample_product("Orphan", 999))
        .await
        .unwrap_err();

    assert!(err.is_referential());
    assert_eq!(repo.list(10, 0).await.unwrap().total, 0);
}

#[tokio::test]
async fn test_find_unknown_product() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductRepository::new(database.pool());

    let err = repo.find_by_id(7).await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound { entity: "product" }));
}

#[tokio::test]
async fn test_list_all_and_past_end() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    for i in 0..4 {
        repo.save(common::sample_product(&format!("P{i}"), group_id))
            .await
            .unwrap();
    }

    let all = repo.list(10, 0).await.unwrap();
    assert_eq!(all.items.len(), 4);
    assert_eq!(all.total, 4);

    let exact = repo.list(4, 0).await.unwrap();
    assert_eq!(exact.items.len(), 4);

    let past_end = repo.list(10, 4).await.unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 4);

    let far_past_end = repo.list(10, 1_000).await.unwrap();
    assert!(far_past_end.items.is_empty());
    assert_eq!(far_past_end.total, 4);
}

#[tokio::test]
async fn test_list_ascending_ids() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    for title in ["Zeta", "Alpha", "Mid"] {
        repo.save(common::sample_product(title, group_id))
            .await
            .unwrap();
    }

    let page = repo.list(10, 0).await.unwrap();
    let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let second = repo.list(1, 1).await.unwrap();
    assert_eq!(second.items[0].title, "Alpha");
    assert_eq!(second.total, 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_total_matches_page_under_concurrent_writes() {
    let (database, _dir) = common::create_test_database().await;
    let group_id = common::create_test_group(&database, "Snacks").await;
    let repo = SqliteProductRepository::new(database.pool());

    let writer_pool = database.pool();
    let writer = tokio::spawn(async move {
        let writer_repo = SqliteProductRepository::new(writer_pool);
        for i in 0..200 {
            writer_repo
                .save(common::sample_product(&format!("P{i}"), group_id))
                .await
                .unwrap();
        }
    });

    let limit = 8;
    let mut offset = 0;
    for _ in 0..200 {
        let page = repo.list(limit, offset).await.unwrap();

        let expected = (page.total - offset).clamp(0, limit);
        assert_eq!(page.items.len() as i64, expected);
        if let (Some(first), Some(last)) = (page.items.first(), page.items.last()) {
            assert!(last.id <= page.total);
            assert!(first.id > offset);
        }

        offset = (page.total - limit / 2).max(0);
    }

    writer.await.unwrap();
}
