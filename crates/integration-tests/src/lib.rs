//! Integration tests for the Carved Rock data layer.
//!
//! These tests exercise the cart store and the database-backed product
//! catalog against a real `PostgreSQL` instance, so they are `#[ignore]`d
//! by default and `cargo test` passes without infrastructure.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a disposable database
//! export CARVED_ROCK_TEST_DATABASE_URL=postgres://localhost/carved_rock_test
//!
//! # Run the ignored tests (migrations are applied automatically)
//! cargo test -p carved-rock-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use sqlx::PgPool;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_VAR: &str = "CARVED_ROCK_TEST_DATABASE_URL";

/// Connection string for the test database.
///
/// # Panics
///
/// Panics when the variable is unset. Only the `#[ignore]`d tests call
/// this, and they run only when the caller has provided a database.
#[must_use]
pub fn test_database_url() -> SecretString {
    std::env::var(TEST_DATABASE_URL_VAR)
        .map(SecretString::from)
        .unwrap_or_else(|_| panic!("{TEST_DATABASE_URL_VAR} must be set for integration tests"))
}

/// Pool against the test database, with migrations applied.
///
/// # Panics
///
/// Panics if the database is unreachable or a migration fails; the tests
/// cannot proceed without a working schema.
pub async fn test_pool() -> PgPool {
    let pool = carved_rock_storefront::db::create_pool(&test_database_url())
        .await
        .expect("failed to connect to the test database");

    sqlx::migrate!("../storefront/migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}
