//! Product catalog queries.
//!
//! The catalog is read-only from this layer. When no database is configured
//! the catalog serves a built-in sample list instead, so templates and demos
//! work without infrastructure.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use tracing::{debug, instrument};

use carved_rock_core::ProductId;

use super::RepositoryError;
use crate::config::StoreConfig;
use crate::models::Product;

/// Catalog backend, selected once at construction.
///
/// The choice is static for the lifetime of the instance: a catalog built
/// without a connection string serves sample data permanently, and a
/// database-backed catalog never falls back on query failure.
enum CatalogBackend {
    /// Built-in sample list.
    Sample,
    /// Live `PostgreSQL` pool.
    Database(PgPool),
}

/// Read-only access to the product catalog.
pub struct ProductCatalog {
    backend: CatalogBackend,
}

impl ProductCatalog {
    /// Build a catalog from configuration.
    ///
    /// Connects when a database URL is configured; otherwise the catalog
    /// serves sample data for its lifetime.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if a database is configured but the pool cannot
    /// be created. There is no fallback to sample data on connection
    /// failure, only on absent configuration.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        match &config.database_url {
            Some(url) => Ok(Self::with_pool(super::create_pool(url).await?)),
            None => Ok(Self::sample()),
        }
    }

    /// Catalog backed by an existing pool.
    #[must_use]
    pub const fn with_pool(pool: PgPool) -> Self {
        Self {
            backend: CatalogBackend::Database(pool),
        }
    }

    /// Catalog serving the built-in sample list.
    #[must_use]
    pub const fn sample() -> Self {
        Self {
            backend: CatalogBackend::Sample,
        }
    }

    /// List the entire catalog in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        match &self.backend {
            CatalogBackend::Sample => Ok(sample_catalog()),
            CatalogBackend::Database(pool) => {
                let products = sqlx::query_as::<_, Product>(
                    r#"
                    SELECT "Id", "Name", "Description", "ImageUrl", "Price", "Category"
                    FROM "Products"
                    "#,
                )
                .fetch_all(pool)
                .await?;

                debug!(count = products.len(), "Listed products");
                Ok(products)
            }
        }
    }

    /// Get the product with the given ID.
    ///
    /// Returns `None` when no product matches; absence is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        match &self.backend {
            CatalogBackend::Sample => Ok(sample_catalog().into_iter().find(|p| p.id == id)),
            CatalogBackend::Database(pool) => {
                let product = sqlx::query_as::<_, Product>(
                    r#"
                    SELECT "Id", "Name", "Description", "ImageUrl", "Price", "Category"
                    FROM "Products"
                    WHERE "Id" = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?;

                Ok(product)
            }
        }
    }

    /// List products whose category matches, case-insensitively.
    ///
    /// An absent or empty category behaves exactly like [`Self::list_all`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return self.list_all().await;
        };

        match &self.backend {
            CatalogBackend::Sample => Ok(sample_catalog()
                .into_iter()
                .filter(|p| p.category.eq_ignore_ascii_case(category))
                .collect()),
            CatalogBackend::Database(pool) => {
                let products = sqlx::query_as::<_, Product>(
                    r#"
                    SELECT "Id", "Name", "Description", "ImageUrl", "Price", "Category"
                    FROM "Products"
                    WHERE LOWER("Category") = LOWER($1)
                    "#,
                )
                .bind(category)
                .fetch_all(pool)
                .await?;

                debug!(
                    category,
                    count = products.len(),
                    "Listed products by category"
                );
                Ok(products)
            }
        }
    }
}

/// Upsert the sample catalog into the `"Products"` table.
///
/// Used by the seed command and by tests, so a database-backed catalog
/// starts from the same content the sample backend serves.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if an insert fails.
#[instrument(skip(pool))]
pub async fn seed_sample_catalog(pool: &PgPool) -> Result<u64, RepositoryError> {
    let products = sample_catalog();
    let mut count = 0u64;

    for product in &products {
        sqlx::query(
            r#"
            INSERT INTO "Products" ("Id", "Name", "Description", "ImageUrl", "Price", "Category")
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT ("Id") DO UPDATE
            SET "Name" = EXCLUDED."Name",
                "Description" = EXCLUDED."Description",
                "ImageUrl" = EXCLUDED."ImageUrl",
                "Price" = EXCLUDED."Price",
                "Category" = EXCLUDED."Category"
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.image_url)
        .bind(product.price)
        .bind(&product.category)
        .execute(pool)
        .await?;
        count += 1;
    }

    debug!(count, "Seeded sample catalog");
    Ok(count)
}

/// The built-in sample catalog served when no database is configured.
///
/// Nine products across three categories. The seed command writes this same
/// list to a real database.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    vec![
        sample_product(
            1,
            "Clothing",
            dec!(9.99),
            "images/products/boots/shutterstock_66842440.jpg",
        ),
        sample_product(
            2,
            "Clothing",
            dec!(19.99),
            "images/products/boots/shutterstock_475046062.jpg",
        ),
        sample_product(
            3,
            "Clothing",
            dec!(29.99),
            "images/products/boots/shutterstock_1121278055.jpg",
        ),
        sample_product(
            4,
            "Footwear",
            dec!(39.99),
            "images/products/boots/shutterstock_66842440.jpg",
        ),
        sample_product(
            5,
            "Footwear",
            dec!(49.99),
            "images/products/boots/shutterstock_222721876.jpg",
        ),
        sample_product(
            6,
            "Footwear",
            dec!(59.99),
            "images/products/boots/shutterstock_475046062.jpg",
        ),
        sample_product(
            7,
            "Equipment",
            dec!(69.99),
            "images/products/climbing gear/shutterstock_6170527.jpg",
        ),
        sample_product(
            8,
            "Equipment",
            dec!(79.99),
            "images/products/climbing gear/shutterstock_48040747.jpg",
        ),
        sample_product(
            9,
            "Equipment",
            dec!(89.99),
            "images/products/climbing gear/shutterstock_64998481.jpg",
        ),
    ]
}

fn sample_product(id: i32, category: &str, price: Decimal, image_url: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Sample Product {id}"),
        description: format!("Sample Product Description {id}"),
        image_url: image_url.to_owned(),
        price,
        category: category.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_list_all_returns_nine_products() {
        let catalog = ProductCatalog::sample();
        let products = catalog.list_all().await.unwrap();
        assert_eq!(products.len(), 9);
        assert_eq!(products, sample_catalog());
    }

    #[tokio::test]
    async fn test_unconfigured_config_selects_sample_mode() {
        let config = StoreConfig::from_database_url("");
        let catalog = ProductCatalog::from_config(&config).await.unwrap();
        let products = catalog.list_all().await.unwrap();
        assert_eq!(products.len(), 9);
    }

    #[tokio::test]
    async fn test_sample_get_by_id() {
        let catalog = ProductCatalog::sample();
        let product = catalog.get_by_id(ProductId::new(4)).await.unwrap().unwrap();
        assert_eq!(product.name, "Sample Product 4");
        assert_eq!(product.category, "Footwear");
        assert_eq!(product.price, dec!(39.99));
    }

    #[tokio::test]
    async fn test_sample_get_by_id_missing_is_none() {
        let catalog = ProductCatalog::sample();
        assert!(catalog.get_by_id(ProductId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sample_category_match_is_case_insensitive() {
        let catalog = ProductCatalog::sample();
        for query in ["Clothing", "clothing", "CLOTHING"] {
            let products = catalog.list_by_category(Some(query)).await.unwrap();
            assert_eq!(products.len(), 3, "query {query:?}");
            assert!(products.iter().all(|p| p.category == "Clothing"));
        }
    }

    #[tokio::test]
    async fn test_sample_empty_category_lists_all() {
        let catalog = ProductCatalog::sample();
        assert_eq!(catalog.list_by_category(None).await.unwrap().len(), 9);
        assert_eq!(catalog.list_by_category(Some("")).await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_sample_unknown_category_is_empty() {
        let catalog = ProductCatalog::sample();
        let products = catalog.list_by_category(Some("Kayaks")).await.unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_sample_prices_ascend_by_ten() {
        let products = sample_catalog();
        let expected = (0..9).map(|i| dec!(9.99) + Decimal::from(i) * dec!(10));
        for (product, price) in products.iter().zip(expected) {
            assert_eq!(product.price, price);
        }
    }
}
