//! Database operations for the storefront `PostgreSQL`.
//!
//! # Tables
//!
//! - `"Products"` - Product catalog (read-only from this layer)
//! - `"CartItems"` - Cart lines keyed by user or session ID
//!
//! Table and column names are quoted `PascalCase`: the schema predates this
//! service and the original names must survive `PostgreSQL` case folding.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p carved-rock-cli -- migrate
//! ```

pub mod cart;
pub mod products;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use cart::CartStore;
pub use products::ProductCatalog;

/// Errors that can occur during repository operations.
///
/// Absence of a matching row is not an error; queries return `Ok(None)` or
/// an empty list for that.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx. Propagated to the caller as-is: this layer
    /// does not retry or recover.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// Each operation checks a connection out of the pool for its duration and
/// returns it when the call completes or fails.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
