//! Catalog error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when reading from a catalog provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The backing data source could not serve the request.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Reading a catalog snapshot from disk failed.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A catalog snapshot could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
