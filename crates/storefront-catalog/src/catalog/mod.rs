//! Product catalog module.
//!
//! Contains types for products, variants, price ranges, and main categories.

mod category;
mod product;

pub use category::MainCategory;
pub use product::{PriceRange, Product, ProductVariant, SaleUnit};
