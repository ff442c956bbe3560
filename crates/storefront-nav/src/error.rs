//! Navigation error types.

use storefront_catalog::catalog::MainCategory;
use thiserror::Error;

/// Errors raised by explicit navigation requests.
///
/// URL parsing never fails: unrecognized values degrade to a narrower
/// selection instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A subcategory was requested while no main category is selected.
    #[error("No main category selected")]
    NoCategorySelected,

    /// Main category slug not in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Subcategory slug not present in the active taxonomy.
    #[error("Unknown subcategory '{slug}' for category {category}")]
    UnknownSubcategory { category: MainCategory, slug: String },

    /// Input that normalizes to an empty slug.
    #[error("Invalid subcategory slug: {0:?}")]
    InvalidSlug(String),

    /// Two display names normalize to the same slug.
    #[error("Subcategories {first:?} and {second:?} share slug '{slug}' in {category}")]
    SlugCollision {
        category: MainCategory,
        slug: String,
        first: String,
        second: String,
    },
}
