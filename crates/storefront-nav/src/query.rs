//! URL query string codec for [`SelectionState`].
//!
//! Parsing is total: unknown keys are ignored, an unknown category slug
//! parses as `NoCategory` and a subcategory without a valid category is
//! dropped. `from_query_string(&s.to_query_string()) == s` for every
//! reachable state.

use std::borrow::Cow;

use storefront_catalog::catalog::MainCategory;

use crate::selection::SelectionState;

/// Main category slug parameter.
pub const PARAM_CATEGORY: &str = "categorie";
/// Subcategory slug parameter.
pub const PARAM_SUBCATEGORY: &str = "subcategorie";
/// Free-text search parameter.
pub const PARAM_SEARCH: &str = "cautare";

impl SelectionState {
    /// Parse a selection from a URL query string (leading `?` optional).
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);

        let mut category_param = None;
        let mut subcategory_param = None;
        let mut search_param = None;

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));

            // Last occurrence wins.
            match key.as_ref() {
                PARAM_CATEGORY => category_param = Some(value.into_owned()),
                PARAM_SUBCATEGORY => subcategory_param = Some(value.into_owned()),
                PARAM_SEARCH => search_param = Some(value.into_owned()),
                _ => {}
            }
        }

        let mut state = SelectionState::new();

        match category_param.as_deref().map(MainCategory::from_slug) {
            Some(Some(category)) => {
                state.select_category(category);
                if let Some(sub) = subcategory_param.as_deref() {
                    // Empty or unsluggable values mean "no subcategory".
                    let _ = state.select_subcategory(sub);
                }
            }
            Some(None) => {
                tracing::debug!(
                    value = ?category_param,
                    "unrecognized category in URL, showing category picker"
                );
            }
            None => {}
        }

        if let Some(search) = search_param {
            state.set_search(search);
        }

        state
    }

    /// Serialize to a query string without the leading `?`.
    ///
    /// Parameters are emitted in a fixed order; absent values are omitted,
    /// so the `NoCategory` state with no search is the empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(3);

        if let Some(category) = self.category() {
            pairs.push(format!("{}={}", PARAM_CATEGORY, category.slug()));
        }
        if let Some(sub) = self.subcategory() {
            pairs.push(format!("{}={}", PARAM_SUBCATEGORY, urlencoding::encode(sub)));
        }
        if !self.search().is_empty() {
            pairs.push(format!("{}={}", PARAM_SEARCH, urlencoding::encode(self.search())));
        }

        pairs.join("&")
    }

    /// Link target for this selection on the listing page at `path`.
    pub fn href(&self, path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        }
    }
}

/// Decode one form-encoded component, treating `+` as a space.
fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}
