//! Cart domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carved_rock_core::{CartItemId, ProductId};

/// A single line in a shopping cart.
///
/// The owner column holds either an authenticated user ID or an anonymous
/// session ID; the two are substitutable for lookup. Product name and price
/// are cached at the time the item is added, so later catalog edits don't
/// rewrite carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct CartItem {
    /// Row ID; [`CartItemId::UNSAVED`] until the item is persisted.
    pub id: CartItemId,
    /// Owner of the row (user ID, or session ID for anonymous carts).
    pub user_id: Option<String>,
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name cached when the item was added.
    pub product_name: String,
    /// Unit price cached when the item was added.
    pub price: Decimal,
    /// Number of units. Positive.
    pub quantity: i32,
    /// When the item was first added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Build a transient item for insertion, stamped with the current time.
    ///
    /// The owner is assigned when the item is saved, not here.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        price: Decimal,
        quantity: i32,
    ) -> Self {
        Self {
            id: CartItemId::UNSAVED,
            user_id: None,
            product_id,
            product_name: product_name.into(),
            price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Whether this item still needs an INSERT rather than an UPDATE.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id == CartItemId::UNSAVED
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_new_item_is_new() {
        let item = CartItem::new(ProductId::new(4), "Sample Product 4", dec!(39.99), 2);
        assert!(item.is_new());
        assert_eq!(item.id, CartItemId::UNSAVED);
        assert!(item.user_id.is_none());
    }

    #[test]
    fn test_persisted_item_is_not_new() {
        let mut item = CartItem::new(ProductId::new(4), "Sample Product 4", dec!(39.99), 2);
        item.id = CartItemId::new(17);
        assert!(!item.is_new());
    }
}
