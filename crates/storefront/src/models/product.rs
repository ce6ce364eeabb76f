//! Product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carved_rock_core::ProductId;

/// A catalog product.
///
/// Rows are read-only from this layer; the catalog is maintained by
/// external tooling. Column names keep the original `PascalCase` schema,
/// handled by the `FromRow` rename so every query maps through one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Path to the product image, relative to the static asset root.
    pub image_url: String,
    /// Unit price. Non-negative.
    pub price: Decimal,
    /// Category label (e.g., "Footwear").
    pub category: String,
}
