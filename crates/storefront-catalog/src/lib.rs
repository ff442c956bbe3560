//! Catalog domain types for the paint and insulation storefront.
//!
//! This crate provides the read-only inputs of the catalog navigation engine:
//!
//! - **Catalog**: Products, variants, price ranges, main categories
//! - **Provider**: The async `CatalogProvider` seam and the immutable
//!   `StaticCatalog` snapshot that implements it
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let catalog = StaticCatalog::load("catalog.json")?;
//!
//! let paints = catalog
//!     .list_products(&MainCategory::Paints.synonym_set())
//!     .await?;
//! println!("{} paint products", paints.len());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod provider;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, CatalogResult};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{MainCategory, PriceRange, Product, ProductVariant, SaleUnit};

    // Providers
    pub use crate::provider::{CatalogProvider, StaticCatalog};
}
