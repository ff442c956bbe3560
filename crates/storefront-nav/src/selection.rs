//! Selection state machine.
//!
//! ```text
//! NoCategory --select_category--> CategorySelected --select_subcategory--> SubcategorySelected
//!     ^                                 |    ^                                   |
//!     +---------clear_category----------+    +--------clear_subcategory----------+
//! ```
//!
//! `select_category` is valid from every state and always resets the
//! subcategory. The search term is orthogonal to both.

use serde::Serialize;
use storefront_catalog::catalog::MainCategory;

use crate::error::NavError;
use crate::slug::slugify;

/// Which of the three navigation states a selection is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    NoCategory,
    CategorySelected,
    SubcategorySelected,
}

/// Current main category, subcategory slug and search term.
///
/// Invariant: `subcategory` is `None` whenever `category` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    category: Option<MainCategory>,
    subcategory: Option<String>,
    search: String,
}

impl SelectionState {
    /// The initial `NoCategory` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<MainCategory> {
        self.category
    }

    /// Selected subcategory slug.
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.category, &self.subcategory) {
            (None, _) => SelectionPhase::NoCategory,
            (Some(_), None) => SelectionPhase::CategorySelected,
            (Some(_), Some(_)) => SelectionPhase::SubcategorySelected,
        }
    }

    /// Select a main category. Always clears the subcategory.
    pub fn select_category(&mut self, category: MainCategory) {
        self.category = Some(category);
        self.subcategory = None;
    }

    /// Select a subcategory of the current main category.
    ///
    /// The input is normalized through [`slugify`], so a display name or a
    /// slug both work.
    pub fn select_subcategory(&mut self, input: &str) -> Result<(), NavError> {
        if self.category.is_none() {
            return Err(NavError::NoCategorySelected);
        }
        let slug = slugify(input);
        if slug.is_empty() {
            return Err(NavError::InvalidSlug(input.to_string()));
        }
        self.subcategory = Some(slug);
        Ok(())
    }

    pub fn clear_subcategory(&mut self) {
        self.subcategory = None;
    }

    /// Back to `NoCategory`. The search term survives.
    pub fn clear_category(&mut self) {
        self.category = None;
        self.subcategory = None;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }
}
