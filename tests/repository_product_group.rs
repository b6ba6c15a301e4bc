mod common;

use shortlink_catalog::domain::entities::NewProductGroup;
use shortlink_catalog::domain::repositories::{ProductGroupRepository, ProductRepository};
use shortlink_catalog::infrastructure::persistence::{
    SqliteProductGroupRepository, SqliteProductRepository,
};

fn group(title: &str, description: Option<&str>) -> NewProductGroup {
    NewProductGroup {
        title: title.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn test_save_and_find() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductGroupRepository::new(database.pool());

    let id = repo.save(group("Snacks", Some(""))).await.unwrap();
    assert_eq!(id, 1);

    let found = repo.find_by_id(id).await.unwrap();
    assert_eq!(found.id, 1);
    assert_eq!(found.title, "Snacks");
    assert_eq!(found.description.as_deref(), Some(""));
}

#[tokio::test]
async fn test_absent_description_stays_none() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductGroupRepository::new(database.pool());

    let id = repo.save(group("Drinks", None)).await.unwrap();

    assert_eq!(repo.find_by_id(id).await.unwrap().description, None);
}

#[tokio::test]
async fn test_find_unknown_group() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductGroupRepository::new(database.pool());

    assert!(repo.find_by_id(42).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_list_pages_in_id_order() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductGroupRepository::new(database.pool());

    for title in ["A", "B", "C", "D", "E"] {
        repo.save(group(title, None)).await.unwrap();
    }

    let page = repo.list(2, 1).await.unwrap();
    assert_eq!(page.total, 5);
    let titles: Vec<_> = page.items.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);

    let past_end = repo.list(10, 5).await.unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_total_matches_page_under_concurrent_writes() {
    let (database, _dir) = common::create_test_database().await;
    let repo = SqliteProductGroupRepository::new(database.pool());

    let writer_pool = database.pool();
    let writer = tokio::spawn(async move {
        let writer_repo = SqliteProductGroupRepository::new(writer_pool);
        for i in 0..200 {
            writer_repo
                .save(group(&format!("G{i}"), None))
                .await
                .unwrap();
        }
    });

    let limit = 10;
    let mut offset = 0;
    for _ in 0..200 {
        let page = repo.list(limit, offset).await.unwrap();

        let expected = (page.total - offset).clamp(0, limit);
        assert_eq!(
            page.items.len() as i64,
            expected,
            "total {} offset {}",
            page.total,
            offset
        );
        assert!(page.items.len() as i64 <= page.total);

        // Trail the end of the table, where count and page diverge first.
        offset = (page.total - limit / 2).max(0);
    }

    writer.await.unwrap();
    assert_eq!(repo.list(limit, 0).await.unwrap().total, 200);
}

#[tokio::test]
async fn test_deleting_group_cascades_to_products() {
    let (database, _dir) = common::create_test_database().await;
    let groups = SqliteProductGroupRepository::new(database.pool());
    let products = SqliteProductRepository::new(database.pool());

    let group_id = groups.save(group("Snacks", None)).await.unwrap();
    let product_id = products
        .save(common::sample_product("Chips", group_id))
        .await
        .unwrap();

    // There is no delete operation for groups; remove it at the store level.
    sqlx::query("DELETE FROM product_groups WHERE id = ?")
        .bind(group_id)
        .execute(database.pool().as_ref())
        .await
        .unwrap();

    assert!(products.find_by_id(product_id).await.unwrap_err().is_not_found());
    assert_eq!(products.list(10, 0).await.unwrap().total, 0);
}
