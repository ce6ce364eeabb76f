//! Seed the product catalog with sample data.
//!
//! Writes the same nine products the catalog serves in sample-data mode, so
//! a database-backed storefront starts from identical content. Existing
//! rows with matching IDs are updated in place.

use tracing::info;

use carved_rock_storefront::config::StoreConfig;
use carved_rock_storefront::db;
use carved_rock_storefront::db::products::seed_sample_catalog;

/// Upsert the sample catalog into the `"Products"` table.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the connection fails,
/// or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env();
    let database_url = config.require_database_url()?;

    let pool = db::create_pool(database_url).await?;

    let count = seed_sample_catalog(&pool).await?;

    info!(count, "Seeded sample catalog");
    Ok(())
}
