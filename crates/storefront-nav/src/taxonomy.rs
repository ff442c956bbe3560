//! Subcategory taxonomy resolution.
//!
//! The pill list for a main category is the union of a fixed default list
//! and every subcategory tag seen on the loaded products, ordered by a
//! fixed priority list with unranked names alphabetically after it.
//! Recomputed from scratch on every product-set change.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use storefront_catalog::catalog::{MainCategory, Product};

use crate::error::NavError;
use crate::slug::slugify;

/// Subcategories always offered for a main category, even with no data.
pub fn default_subcategories(category: MainCategory) -> &'static [&'static str] {
    match category {
        MainCategory::Paints => &[
            "ELF Decor",
            "Vopsele lavabile",
            "Tencuieli decorative",
            "Grunduri",
        ],
        MainCategory::Insulation => &[
            "IZOLATII ECO-FRIENDLY",
            "MATERIALE HIDROIZOLANTE",
            "ADEZIVI&CHITURI",
        ],
    }
}

/// Display ranking for a main category. Starts with the defaults.
pub fn priority_order(category: MainCategory) -> &'static [&'static str] {
    match category {
        MainCategory::Paints => &[
            "ELF Decor",
            "Vopsele lavabile",
            "Tencuieli decorative",
            "Grunduri",
            "Vopsele pentru lemn",
            "Lacuri",
        ],
        MainCategory::Insulation => &[
            "IZOLATII ECO-FRIENDLY",
            "MATERIALE HIDROIZOLANTE",
            "ADEZIVI&CHITURI",
            "Polistiren",
            "Vata minerala",
        ],
    }
}

/// One subcategory pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subcategory {
    /// URL slug derived from the display name.
    pub id: String,
    /// Canonical label, matched exactly against product subcategory tags.
    pub display_name: String,
    /// Position in the priority list, `None` when unranked.
    pub ordinal: Option<usize>,
    /// Loaded products tagged with this subcategory.
    pub product_count: usize,
}

/// Ordered subcategories for one main category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    category: MainCategory,
    subcategories: Vec<Subcategory>,
}

impl Taxonomy {
    /// The main category this taxonomy belongs to.
    pub fn category(&self) -> MainCategory {
        self.category
    }

    /// Subcategories in display order.
    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.iter()
    }

    pub fn len(&self) -> usize {
        self.subcategories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subcategories.is_empty()
    }

    /// Look up a subcategory by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == slug)
    }

    /// Map a slug back to its canonical display name.
    pub fn display_name_for(&self, slug: &str) -> Option<&str> {
        self.find_by_slug(slug).map(|s| s.display_name.as_str())
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.find_by_slug(slug).is_some()
    }
}

/// Compute the subcategory list for `category` from its loaded products.
///
/// An empty product slice (nothing loaded, or the load failed) yields the
/// default list alone.
pub fn resolve_taxonomy(category: MainCategory, products: &[Product]) -> Taxonomy {
    let mut counts: BTreeMap<&str, usize> = default_subcategories(category)
        .iter()
        .map(|name| (*name, 0))
        .collect();

    for product in products {
        for tag in &product.subcategory_tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let priority = priority_order(category);
    let mut ranked: Vec<Subcategory> = counts
        .into_iter()
        .map(|(name, product_count)| Subcategory {
            id: slugify(name),
            display_name: name.to_string(),
            ordinal: priority.iter().position(|p| *p == name),
            product_count,
        })
        .collect();
    ranked.sort_by(compare_subcategories);

    let mut taken: HashMap<String, String> = HashMap::new();
    let mut subcategories = Vec::with_capacity(ranked.len());
    for sub in ranked {
        if sub.id.is_empty() {
            tracing::warn!(
                category = %category,
                name = %sub.display_name,
                "subcategory name has no URL slug, skipping"
            );
            continue;
        }
        if let Some(first) = taken.get(&sub.id) {
            tracing::warn!(
                category = %category,
                slug = %sub.id,
                kept = %first,
                dropped = %sub.display_name,
                "subcategory slug collision"
            );
            continue;
        }
        taken.insert(sub.id.clone(), sub.display_name.clone());
        subcategories.push(sub);
    }

    Taxonomy {
        category,
        subcategories,
    }
}

/// Check that `names` normalize to distinct, non-empty slugs.
pub fn validate_taxonomy<'a>(
    category: MainCategory,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), NavError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for name in names {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(NavError::InvalidSlug(name.to_string()));
        }
        match seen.get(&slug) {
            Some(first) if *first != name => {
                return Err(NavError::SlugCollision {
                    category,
                    slug,
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(slug, name);
            }
        }
    }
    Ok(())
}

/// Ranked names by priority position, then unranked names alphabetically.
fn compare_subcategories(a: &Subcategory, b: &Subcategory) -> Ordering {
    match (a.ordinal, b.ordinal) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
            .then_with(|| a.display_name.cmp(&b.display_name)),
    }
}
