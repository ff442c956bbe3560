//! Catalog providers.
//!
//! The navigation engine only sees the `CatalogProvider` trait: a
//! request/response call that may be slow or fail. `StaticCatalog` is the
//! in-process implementation backed by an immutable snapshot.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::{CatalogError, CatalogResult};
use crate::ids::ProductId;

/// Source of product records.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List products whose category tags intersect `category_tags`,
    /// preserving the source order.
    async fn list_products(&self, category_tags: &BTreeSet<String>) -> CatalogResult<Vec<Product>>;

    /// Fetch a single product.
    async fn get_product(&self, id: &ProductId) -> CatalogResult<Product>;
}

#[async_trait]
impl<P: CatalogProvider + ?Sized> CatalogProvider for Arc<P> {
    async fn list_products(&self, category_tags: &BTreeSet<String>) -> CatalogResult<Vec<Product>> {
        (**self).list_products(category_tags).await
    }

    async fn get_product(&self, id: &ProductId) -> CatalogResult<Product> {
        (**self).get_product(id).await
    }
}

/// On-disk/wire shape of a catalog snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Immutable product snapshot, built once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Arc<[Product]>,
}

impl StaticCatalog {
    /// Build a snapshot from products.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Parse a snapshot from a JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(doc.products))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// All products in snapshot order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_products(&self, category_tags: &BTreeSet<String>) -> CatalogResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.in_any_category(category_tags))
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: &ProductId) -> CatalogResult<Product> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}
