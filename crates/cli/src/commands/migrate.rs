//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! cr-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CARVED_ROCK_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL`
//!   connection string

use tracing::info;

use carved_rock_storefront::config::StoreConfig;
use carved_rock_storefront::db;

/// Apply all pending migrations from `crates/storefront/migrations/`.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the connection fails,
/// or a migration fails to apply.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env();
    let database_url = config.require_database_url()?;

    info!("Connecting to storefront database...");
    let pool = db::create_pool(database_url).await?;

    info!("Running migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
