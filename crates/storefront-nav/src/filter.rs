//! Product filter.
//!
//! All clauses are ANDed. The result keeps the input order and only ever
//! borrows from the input, so it is always a subset.

use serde::Serialize;
use storefront_catalog::catalog::{MainCategory, Product};

use crate::selection::SelectionState;
use crate::taxonomy::Taxonomy;

/// Resolved filter clauses for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    /// Main category, matched through its synonym table.
    pub category: Option<MainCategory>,
    /// Canonical subcategory display name, matched exactly.
    pub subcategory_name: Option<String>,
    /// Lowercased, trimmed search term. Empty means no search clause.
    pub search: String,
}

impl ProductFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_category(category: MainCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Require an exact subcategory tag.
    pub fn with_subcategory(mut self, display_name: impl Into<String>) -> Self {
        self.subcategory_name = Some(display_name.into());
        self
    }

    /// Require a case-insensitive substring of the title or description.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.trim().to_lowercase();
        self
    }

    /// Build the filter for a selection.
    ///
    /// The subcategory slug is mapped back to its display name through
    /// `taxonomy`. A slug the taxonomy does not know adds no subcategory
    /// clause.
    pub fn from_selection(selection: &SelectionState, taxonomy: Option<&Taxonomy>) -> Self {
        let subcategory_name = match (selection.subcategory(), taxonomy) {
            (Some(slug), Some(taxonomy)) if Some(taxonomy.category()) == selection.category() => {
                taxonomy.display_name_for(slug).map(str::to_string)
            }
            _ => None,
        };

        Self {
            category: selection.category(),
            subcategory_name,
            search: selection.search().trim().to_lowercase(),
        }
    }

    /// Check a single product against every clause.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if !category.matches_tags(&product.category_tags) {
                return false;
            }
        }

        if let Some(name) = &self.subcategory_name {
            if !product.subcategory_tags.contains(name) {
                return false;
            }
        }

        if !self.search.is_empty() {
            let in_title = product.title.to_lowercase().contains(&self.search);
            if !in_title && !product.description.to_lowercase().contains(&self.search) {
                return false;
            }
        }

        true
    }

    /// Keep the matching products in input order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter `products` for `selection` in one call.
pub fn filter_products<'a>(
    products: &'a [Product],
    selection: &SelectionState,
    taxonomy: Option<&Taxonomy>,
) -> Vec<&'a Product> {
    ProductFilter::from_selection(selection, taxonomy).apply(products)
}
