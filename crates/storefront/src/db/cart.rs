//! Cart persistence.
//!
//! Cart rows are keyed by an owner column holding either an authenticated
//! user ID or an anonymous session ID. The user ID wins whenever both are
//! known, so a signed-in user's cart survives session churn.

use sqlx::PgPool;
use tracing::{debug, instrument};

use carved_rock_core::CartItemId;

use super::RepositoryError;
use crate::config::{ConfigError, StoreConfig};
use crate::models::CartItem;

/// Error building a cart store from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CartStoreError {
    /// No connection string was configured. Carts are mutable state and
    /// have no sample-data mode; a database is mandatory.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The pool could not be created.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read/write access to persisted cart items.
pub struct CartStore {
    pool: PgPool,
}

impl CartStore {
    /// Cart store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a cart store from configuration, connecting immediately.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Config`] when no connection string is
    /// configured, or [`CartStoreError::Database`] if the pool cannot be
    /// created.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, CartStoreError> {
        let database_url = config.require_database_url()?;
        Ok(Self::new(super::create_pool(database_url).await?))
    }

    /// Fetch the cart for the given owner.
    ///
    /// Returns rows owned by `user_id` when it is present, otherwise rows
    /// owned by `session_id`. An owner with no cart gets an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn get_cart(
        &self,
        session_id: &str,
        user_id: Option<&str>,
    ) -> Result<Vec<CartItem>, RepositoryError> {
        let owner = owner_key(session_id, user_id);

        let items = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT "Id", "UserId", "ProductId", "ProductName", "Price", "Quantity", "AddedAt"
            FROM "CartItems"
            WHERE "UserId" = $1
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Fetched cart");
        Ok(items)
    }

    /// Persist the given items for the owner.
    ///
    /// Items whose ID is [`CartItemId::UNSAVED`] are inserted under the
    /// resolved owner and receive their generated ID in place. All other
    /// items have only their quantity updated, keyed by row ID alone - the
    /// row's owner, product name, and price are never touched here.
    ///
    /// Items are written one at a time without a wrapping transaction; a
    /// failure partway through leaves the earlier writes in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if an insert or update fails.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn save_cart(
        &self,
        session_id: &str,
        user_id: Option<&str>,
        items: &mut [CartItem],
    ) -> Result<(), RepositoryError> {
        let owner = owner_key(session_id, user_id);

        for item in items {
            if item.is_new() {
                let (id,): (i32,) = sqlx::query_as(
                    r#"
                    INSERT INTO "CartItems"
                        ("UserId", "ProductId", "ProductName", "Price", "Quantity", "AddedAt")
                    VALUES ($1, $2, $3, $4, $5, $6)
                    RETURNING "Id"
                    "#,
                )
                .bind(owner)
                .bind(item.product_id)
                .bind(&item.product_name)
                .bind(item.price)
                .bind(item.quantity)
                .bind(item.added_at)
                .fetch_one(&self.pool)
                .await?;

                item.id = CartItemId::new(id);
            } else {
                sqlx::query(
                    r#"
                    UPDATE "CartItems"
                    SET "Quantity" = $1
                    WHERE "Id" = $2
                    "#,
                )
                .bind(item.quantity)
                .bind(item.id)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    /// Delete every cart row for the owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    #[instrument(skip(self))]
    pub async fn clear_cart(
        &self,
        session_id: &str,
        user_id: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let owner = owner_key(session_id, user_id);

        let result = sqlx::query(
            r#"
            DELETE FROM "CartItems"
            WHERE "UserId" = $1
            "#,
        )
        .bind(owner)
        .execute(&self.pool)
        .await?;

        debug!(rows = result.rows_affected(), "Cleared cart");
        Ok(())
    }
}

/// Resolve the owner key for a cart operation.
///
/// User and session IDs are mutually exclusive selectors: rows live under
/// exactly one of them, and the user ID is preferred when present.
fn owner_key<'a>(session_id: &'a str, user_id: Option<&'a str>) -> &'a str {
    user_id.unwrap_or(session_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_key_prefers_user_id() {
        assert_eq!(owner_key("sess-1", Some("user-9")), "user-9");
    }

    #[test]
    fn test_owner_key_falls_back_to_session() {
        assert_eq!(owner_key("sess-1", None), "sess-1");
    }
}
