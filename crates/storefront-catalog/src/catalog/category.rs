//! Main categories and their declared tag synonyms.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level catalog division.
///
/// Closed set: adding a variant is a compile error until every `match`
/// below (slug, display name, synonyms) and the navigation taxonomy tables
/// cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MainCategory {
    /// Decorative and interior/exterior paints.
    #[serde(rename = "vopsele")]
    Paints,
    /// Thermal insulation, waterproofing and adhesives.
    #[serde(rename = "izolatii")]
    Insulation,
}

impl MainCategory {
    /// Every main category, in picker order.
    pub const ALL: [MainCategory; 2] = [MainCategory::Paints, MainCategory::Insulation];

    /// Canonical URL slug.
    pub fn slug(&self) -> &'static str {
        match self {
            MainCategory::Paints => "vopsele",
            MainCategory::Insulation => "izolatii",
        }
    }

    /// Parse a URL slug. Accepts the canonical slug and the English alias.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vopsele" | "paints" => Some(MainCategory::Paints),
            "izolatii" | "insulation" => Some(MainCategory::Insulation),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            MainCategory::Paints => "Vopsele",
            MainCategory::Insulation => "Izola\u{021b}ii",
        }
    }

    /// Raw category tag spellings that count as membership in this category.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            MainCategory::Paints => &[
                "vopsele",
                "vopsele decorative",
                "decorative",
                "lavabile",
                "paints",
            ],
            MainCategory::Insulation => &[
                "izola\u{021b}ii",
                "izolatii",
                "termice",
                "eco",
                "insulation",
            ],
        }
    }

    /// The synonym table as an owned set, the shape providers take.
    pub fn synonym_set(&self) -> BTreeSet<String> {
        self.synonyms().iter().map(|s| s.to_string()).collect()
    }

    /// Check whether any of the given category tags belongs to this category.
    pub fn matches_tags(&self, tags: &BTreeSet<String>) -> bool {
        self.synonyms().iter().any(|s| tags.contains(*s))
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_slug_round_trip() {
        for category in MainCategory::ALL {
            assert_eq!(MainCategory::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn test_english_aliases() {
        assert_eq!(MainCategory::from_slug("paints"), Some(MainCategory::Paints));
        assert_eq!(MainCategory::from_slug(" Insulation "), Some(MainCategory::Insulation));
        assert_eq!(MainCategory::from_slug("tools"), None);
        assert_eq!(MainCategory::from_slug(""), None);
    }

    #[test]
    fn test_synonym_membership() {
        assert!(MainCategory::Insulation.matches_tags(&tags(&["eco", "premium"])));
        assert!(MainCategory::Insulation.matches_tags(&tags(&["izola\u{021b}ii"])));
        assert!(!MainCategory::Paints.matches_tags(&tags(&["eco", "premium"])));
        assert!(MainCategory::Paints.matches_tags(&tags(&["lavabile"])));
    }

    #[test]
    fn test_synonym_tables_are_disjoint() {
        let paints = MainCategory::Paints.synonym_set();
        let insulation = MainCategory::Insulation.synonym_set();
        assert!(paints.is_disjoint(&insulation));
        for category in MainCategory::ALL {
            assert!(!category.synonyms().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&MainCategory::Insulation).unwrap();
        assert_eq!(json, "\"izolatii\"");
    }
}
