//! Database-backed product catalog tests.
//!
//! Run with: `cargo test -p carved-rock-integration-tests -- --ignored`
//! after pointing `CARVED_ROCK_TEST_DATABASE_URL` at a disposable database.

#![allow(clippy::unwrap_used)]

use carved_rock_core::ProductId;
use carved_rock_integration_tests::test_pool;
use carved_rock_storefront::db::ProductCatalog;
use carved_rock_storefront::db::products::{sample_catalog, seed_sample_catalog};

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn seeded_catalog_serves_the_sample_products() {
    let pool = test_pool().await;
    seed_sample_catalog(&pool).await.unwrap();

    let catalog = ProductCatalog::with_pool(pool);
    let listed = catalog.list_all().await.unwrap();

    for expected in sample_catalog() {
        let found = listed.iter().find(|p| p.id == expected.id);
        assert_eq!(found, Some(&expected));
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn get_by_id_matches_sample_mode() {
    let pool = test_pool().await;
    seed_sample_catalog(&pool).await.unwrap();

    let catalog = ProductCatalog::with_pool(pool);
    let product = catalog.get_by_id(ProductId::new(4)).await.unwrap().unwrap();

    assert_eq!(product.name, "Sample Product 4");
    assert_eq!(product.category, "Footwear");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn category_match_is_case_insensitive_in_sql() {
    let pool = test_pool().await;
    seed_sample_catalog(&pool).await.unwrap();

    let catalog = ProductCatalog::with_pool(pool);
    let clothing = catalog.list_by_category(Some("cLoThInG")).await.unwrap();

    let sample_clothing: Vec<_> = sample_catalog()
        .into_iter()
        .filter(|p| p.category == "Clothing")
        .map(|p| p.id)
        .collect();
    for id in sample_clothing {
        assert!(clothing.iter().any(|p| p.id == id));
    }
}
