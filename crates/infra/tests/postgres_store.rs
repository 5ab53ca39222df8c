//! Postgres product store against a real database.
//!
//! Ignored by default. Point `DATABASE_URL` at a disposable Postgres instance
//! and run with `cargo test -p skuvault-infra -- --ignored`.

use skuvault_infra::{DatabaseConfig, PostgresProductStore, ProductStore, StoreError, db};
use skuvault_products::{NewProduct, Page};

async fn store() -> PostgresProductStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for Postgres tests");
    let pool = db::connect_and_migrate(&DatabaseConfig {
        url,
        max_connections: 2,
    })
    .await
    .expect("failed to prepare test database");
    PostgresProductStore::new(pool)
}

fn unique_sku(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_then_fetch_round_trip() {
    let store = store().await;
    let sku = unique_sku("rt");

    let created = store.insert(NewProduct::new(&sku, "Widget")).await.unwrap();
    let fetched = store.fetch_by_sku(&sku).await.unwrap();
    assert_eq!(created, fetched);

    store.delete_by_sku(&sku).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_sku_is_rejected_by_the_database() {
    let store = store().await;
    let sku = unique_sku("dup");

    store.insert(NewProduct::new(&sku, "First")).await.unwrap();
    let err = store.insert(NewProduct::new(&sku, "Second")).await.unwrap_err();
    assert!(matches!(err, StoreError::Backend(_)));

    store.delete_by_sku(&sku).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn delete_of_missing_sku_succeeds() {
    let store = store().await;
    let sku = unique_sku("gone");

    assert_eq!(store.delete_by_sku(&sku).await.unwrap(), 0);
    assert_eq!(store.fetch_by_sku(&sku).await, Err(StoreError::NotFound));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn page_respects_limit() {
    let store = store().await;
    let skus: Vec<String> = (0..3).map(|_| unique_sku("page")).collect();
    for sku in &skus {
        store.insert(NewProduct::new(sku, "Paged")).await.unwrap();
    }

    let page = store.fetch_page(Page::new(2, 0)).await.unwrap();
    assert_eq!(page.len(), 2);

    for sku in &skus {
        store.delete_by_sku(sku).await.unwrap();
    }
}
