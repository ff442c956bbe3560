//! What the listing page should render.

use serde::Serialize;
use storefront_catalog::catalog::MainCategory;

use crate::selection::{SelectionPhase, SelectionState};

/// Page layout, derived from the selection the same way the URL is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "category", rename_all = "snake_case")]
pub enum PageView {
    /// No `categorie` parameter.
    CategoryPicker,
    /// `categorie` without `subcategorie`.
    SubcategoryPicker(MainCategory),
    /// Both parameters present.
    ProductList(MainCategory),
}

impl PageView {
    pub fn for_selection(selection: &SelectionState) -> Self {
        match (selection.phase(), selection.category()) {
            (SelectionPhase::SubcategorySelected, Some(category)) => PageView::ProductList(category),
            (SelectionPhase::CategorySelected, Some(category)) => {
                PageView::SubcategoryPicker(category)
            }
            _ => PageView::CategoryPicker,
        }
    }

    pub fn category(&self) -> Option<MainCategory> {
        match self {
            PageView::CategoryPicker => None,
            PageView::SubcategoryPicker(c) | PageView::ProductList(c) => Some(*c),
        }
    }
}

/// State of the product listing area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListingStatus {
    /// No category selected, nothing to list.
    Idle,
    Loading,
    /// The last load failed; offer a retry.
    Failed { message: String },
    /// Loaded, but the filter left nothing.
    NoMatches,
    Ready { count: usize },
}

impl ListingStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, ListingStatus::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_selection() {
        let mut state = SelectionState::new();
        assert_eq!(PageView::for_selection(&state), PageView::CategoryPicker);

        state.select_category(MainCategory::Insulation);
        assert_eq!(
            PageView::for_selection(&state),
            PageView::SubcategoryPicker(MainCategory::Insulation)
        );

        state.select_subcategory("adezivichituri").unwrap();
        let view = PageView::for_selection(&state);
        assert_eq!(view, PageView::ProductList(MainCategory::Insulation));
        assert_eq!(view.category(), Some(MainCategory::Insulation));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PageView::SubcategoryPicker(MainCategory::Paints)).unwrap();
        assert_eq!(json["view"], "subcategory_picker");
        assert_eq!(json["category"], "vopsele");

        let json = serde_json::to_value(ListingStatus::Ready { count: 3 }).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["count"], 3);
    }
}
