//! Product and variant types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// Unit a variant is sold by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaleUnit {
    /// Litres of paint.
    #[serde(rename = "l")]
    Litre,
    /// Kilograms (plasters, adhesives).
    Kg,
    /// Square metres (boards, membranes).
    #[serde(rename = "mp")]
    SquareMetre,
    /// Single piece, bucket or pack.
    #[default]
    #[serde(rename = "buc")]
    Piece,
}

impl SaleUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleUnit::Litre => "l",
            SaleUnit::Kg => "kg",
            SaleUnit::SquareMetre => "mp",
            SaleUnit::Piece => "buc",
        }
    }
}

/// Price span of a variant (e.g. tinted bases priced by colour group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// A range with a single price.
    pub fn fixed(price: Money) -> Self {
        Self {
            min: price,
            max: price,
        }
    }

    /// Check if min and max are the same price.
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Format as "189.90 lei" or "189.90 lei - 240.00 lei".
    pub fn display(&self) -> String {
        if self.is_fixed() {
            self.min.display()
        } else {
            format!("{} - {}", self.min.display(), self.max.display())
        }
    }
}

/// A purchasable option of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant label (e.g., "15 L", "Alb").
    pub label: String,
    /// Price of this variant.
    pub price: PriceRange,
    /// Unit of sale.
    #[serde(default)]
    pub unit: SaleUnit,
}

/// A catalog item.
///
/// Created by a catalog provider at load time and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Short description for listings.
    #[serde(default)]
    pub short_description: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Main category membership and cross-cutting labels ("eco", "premium").
    #[serde(default)]
    pub category_tags: BTreeSet<String>,
    /// Subcategory display names this product is grouped under.
    #[serde(default)]
    pub subcategory_tags: BTreeSet<String>,
    /// Purchasable options, in display order.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a product with no tags and no variants.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            description: String::new(),
            category_tags: BTreeSet::new(),
            subcategory_tags: BTreeSet::new(),
            variants: Vec::new(),
        }
    }

    /// Add a category tag.
    pub fn with_category_tag(mut self, tag: impl Into<String>) -> Self {
        self.category_tags.insert(tag.into());
        self
    }

    /// Add a subcategory tag.
    pub fn with_subcategory_tag(mut self, tag: impl Into<String>) -> Self {
        self.subcategory_tags.insert(tag.into());
        self
    }

    /// Set the full description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// A product needs at least one variant to be ordered.
    pub fn is_orderable(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Lowest starting price across variants.
    pub fn price_from(&self) -> Option<Money> {
        self.variants
            .iter()
            .map(|v| v.price.min)
            .min_by_key(|m| m.amount_minor)
    }

    /// Check whether any category tag intersects the given set.
    pub fn in_any_category(&self, tags: &BTreeSet<String>) -> bool {
        !self.category_tags.is_disjoint(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn variant(id: &str, min: i64, max: i64) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            label: id.to_string(),
            price: PriceRange {
                min: Money::new(min, Currency::RON),
                max: Money::new(max, Currency::RON),
            },
            unit: SaleUnit::Litre,
        }
    }

    #[test]
    fn test_orderable_requires_variant() {
        let product = Product::new("p1", "ELF Decor Mat");
        assert!(!product.is_orderable());
        assert_eq!(product.price_from(), None);

        let product = product.with_variant(variant("5l", 12000, 12000));
        assert!(product.is_orderable());
    }

    #[test]
    fn test_price_from_picks_lowest_minimum() {
        let product = Product::new("p1", "ELF Decor Mat")
            .with_variant(variant("15l", 31000, 36000))
            .with_variant(variant("5l", 12000, 14000));
        assert_eq!(product.price_from(), Some(Money::new(12000, Currency::RON)));
    }

    #[test]
    fn test_price_range_display() {
        let fixed = PriceRange::fixed(Money::new(4500, Currency::RON));
        assert_eq!(fixed.display(), "45.00 lei");

        let span = variant("x", 4500, 5200).price;
        assert_eq!(span.display(), "45.00 lei - 52.00 lei");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "hidro-1",
            "title": "Membrana hidroizolanta",
            "category_tags": ["izolatii"],
            "variants": [{
                "id": "rola",
                "label": "Rola 10 mp",
                "price": {"min": {"amount_minor": 25000}, "max": {"amount_minor": 25000}},
                "unit": "mp"
            }]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.subcategory_tags.is_empty());
        assert_eq!(product.variants[0].unit, SaleUnit::SquareMetre);
        assert_eq!(product.variants[0].price.min.currency, Currency::RON);
    }
}
