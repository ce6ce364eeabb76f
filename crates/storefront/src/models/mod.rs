//! Domain types for the storefront data layer.

pub mod cart;
pub mod product;

pub use cart::CartItem;
pub use product::Product;
