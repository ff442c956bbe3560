//! Navigation controller.
//!
//! Owns the selection, the loaded product set for the selected category
//! and everything derived from them. Catalog loads are split in two
//! phases so the controller never blocks and never holds a provider:
//!
//! 1. a transition returns a [`Dispatch`] whose `load` the host performs,
//! 2. the host hands the result back through [`NavigationController::complete_load`].
//!
//! Every load carries a [`LoadTicket`]. Only the ticket of the most recent
//! load is accepted; anything older is a stale response and is dropped
//! without touching state. There is no hard cancellation.

use std::collections::BTreeSet;

use storefront_catalog::catalog::{MainCategory, Product};
use storefront_catalog::error::CatalogResult;
use storefront_catalog::provider::CatalogProvider;

use crate::error::NavError;
use crate::filter::ProductFilter;
use crate::selection::SelectionState;
use crate::slug::slugify;
use crate::taxonomy::{resolve_taxonomy, Subcategory, Taxonomy};
use crate::view::{ListingStatus, PageView};

/// Identifies one catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: u64,
    category: MainCategory,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Category the load was issued for.
    pub fn category(&self) -> MainCategory {
        self.category
    }
}

/// A catalog load the host must run and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub category: MainCategory,
    /// Tag set to pass to [`CatalogProvider::list_products`].
    pub category_tags: BTreeSet<String>,
}

/// Result of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Canonical query string for the new selection, without `?`.
    pub query: String,
    /// Load to perform, if the transition needs one.
    pub load: Option<LoadRequest>,
}

/// What [`NavigationController::complete_load`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Products replaced.
    Applied,
    /// Load failed; default pills and a retry affordance are shown.
    Failed,
    /// Response for a superseded selection, discarded.
    Stale,
}

/// Orchestrates selection, catalog loads and derived listing state.
#[derive(Debug, Default)]
pub struct NavigationController {
    selection: SelectionState,
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    generation: u64,
    in_flight: Option<LoadTicket>,
    taxonomy: Option<Taxonomy>,
    visible: Vec<usize>,
}

impl NavigationController {
    /// A controller on the category picker with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the initial state from the page URL.
    ///
    /// A category in the URL yields the initial load in the returned
    /// dispatch.
    pub fn from_query_string(qs: &str) -> (Self, Dispatch) {
        let mut nav = Self::new();
        let dispatch = nav.handle_url_change(qs);
        (nav, dispatch)
    }

    // ---- transitions ----

    /// Select a main category and start loading its products.
    ///
    /// Reselecting the current category reloads it. Any load already in
    /// flight becomes stale.
    pub fn select_category(&mut self, category: MainCategory) -> Dispatch {
        tracing::debug!(category = %category, "select category");
        self.selection.select_category(category);
        let request = self.begin_load(category);
        self.dispatch(Some(request))
    }

    /// Like [`select_category`](Self::select_category), from a URL slug or alias.
    pub fn select_category_slug(&mut self, slug: &str) -> Result<Dispatch, NavError> {
        let category =
            MainCategory::from_slug(slug).ok_or_else(|| NavError::UnknownCategory(slug.to_string()))?;
        Ok(self.select_category(category))
    }

    /// Select one of the current category's subcategory pills.
    ///
    /// Accepts a slug or a display name. Fails for a slug the active
    /// taxonomy does not offer.
    pub fn select_subcategory(&mut self, input: &str) -> Result<Dispatch, NavError> {
        let category = self.selection.category().ok_or(NavError::NoCategorySelected)?;
        let slug = slugify(input);
        if slug.is_empty() {
            return Err(NavError::InvalidSlug(input.to_string()));
        }
        if let Some(taxonomy) = &self.taxonomy {
            if !taxonomy.contains_slug(&slug) {
                return Err(NavError::UnknownSubcategory { category, slug });
            }
        }

        tracing::debug!(category = %category, subcategory = %slug, "select subcategory");
        self.selection.select_subcategory(&slug)?;
        self.refresh_visible();
        Ok(self.dispatch(None))
    }

    pub fn clear_subcategory(&mut self) -> Dispatch {
        tracing::debug!("clear subcategory");
        self.selection.clear_subcategory();
        self.refresh_visible();
        self.dispatch(None)
    }

    /// Back to the category picker. The search term is kept and any
    /// in-flight load becomes stale.
    pub fn clear_category(&mut self) -> Dispatch {
        tracing::debug!("clear category");
        self.selection.clear_category();
        self.reset_listing();
        self.dispatch(None)
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Dispatch {
        self.selection.set_search(text);
        tracing::debug!(search = %self.selection.search(), "set search");
        self.refresh_visible();
        self.dispatch(None)
    }

    /// Apply a URL change from back/forward navigation or a deep link.
    ///
    /// The parsed selection replaces the current one. A changed category
    /// starts a load; a same-category change never reloads. An unknown
    /// subcategory slug is kept while its category is loading and dropped
    /// once the load settles.
    pub fn handle_url_change(&mut self, qs: &str) -> Dispatch {
        let next = SelectionState::from_query_string(qs);
        let previous = self.selection.category();
        self.selection = next;

        match self.selection.category() {
            Some(category) if previous != Some(category) => {
                tracing::debug!(category = %category, "url changed category");
                let request = self.begin_load(category);
                self.dispatch(Some(request))
            }
            Some(_) => {
                if !self.loading {
                    self.reconcile_subcategory();
                }
                self.refresh_visible();
                self.dispatch(None)
            }
            None => {
                if previous.is_some() {
                    tracing::debug!("url cleared category");
                }
                self.reset_listing();
                self.dispatch(None)
            }
        }
    }

    /// Re-issue the load for the current category after a failure.
    ///
    /// Returns `None` when there is nothing to retry.
    pub fn retry(&mut self) -> Option<Dispatch> {
        if self.loading || self.error.is_none() {
            return None;
        }
        let category = self.selection.category()?;
        tracing::info!(category = %category, "retrying catalog load");
        let request = self.begin_load(category);
        Some(self.dispatch(Some(request)))
    }

    // ---- load lifecycle ----

    /// Hand back the result of a [`LoadRequest`].
    ///
    /// After an applied or failed load the selection may have been
    /// narrowed; read [`query_string`](Self::query_string) to sync the URL.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: CatalogResult<Vec<Product>>,
    ) -> LoadOutcome {
        if self.in_flight != Some(ticket) {
            tracing::warn!(
                category = %ticket.category,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale catalog response"
            );
            return LoadOutcome::Stale;
        }

        self.in_flight = None;
        self.loading = false;

        let outcome = match result {
            Ok(products) => {
                tracing::info!(
                    category = %ticket.category,
                    products = products.len(),
                    "catalog loaded"
                );
                self.products = products;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(category = %ticket.category, error = %err, "catalog load failed");
                self.products.clear();
                self.error = Some(err.to_string());
                LoadOutcome::Failed
            }
        };

        self.refresh_taxonomy();
        self.reconcile_subcategory();
        self.refresh_visible();
        outcome
    }

    /// Run `request` against `provider` and apply the result.
    pub async fn load<P>(&mut self, provider: &P, request: LoadRequest) -> LoadOutcome
    where
        P: CatalogProvider + ?Sized,
    {
        let result = provider.list_products(&request.category_tags).await;
        self.complete_load(request.ticket, result)
    }

    // ---- outputs ----

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed load, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The in-flight load, if any.
    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.in_flight
    }

    /// Products loaded for the current category.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn taxonomy(&self) -> Option<&Taxonomy> {
        self.taxonomy.as_ref()
    }

    /// Subcategory pills for the current category, empty without one.
    pub fn subcategories(&self) -> &[Subcategory] {
        self.taxonomy.as_ref().map(Taxonomy::subcategories).unwrap_or(&[])
    }

    /// Loaded products that pass the current filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.visible.iter().filter_map(|&i| self.products.get(i)).collect()
    }

    /// The filter the visible products were computed with.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::from_selection(&self.selection, self.taxonomy.as_ref())
    }

    pub fn query_string(&self) -> String {
        self.selection.to_query_string()
    }

    pub fn page_view(&self) -> PageView {
        PageView::for_selection(&self.selection)
    }

    pub fn listing_status(&self) -> ListingStatus {
        if self.selection.category().is_none() {
            ListingStatus::Idle
        } else if self.loading {
            ListingStatus::Loading
        } else if let Some(message) = &self.error {
            ListingStatus::Failed {
                message: message.clone(),
            }
        } else if self.visible.is_empty() {
            ListingStatus::NoMatches
        } else {
            ListingStatus::Ready {
                count: self.visible.len(),
            }
        }
    }

    // ---- internals ----

    fn dispatch(&self, load: Option<LoadRequest>) -> Dispatch {
        Dispatch {
            query: self.selection.to_query_string(),
            load,
        }
    }

    fn begin_load(&mut self, category: MainCategory) -> LoadRequest {
        self.generation += 1;
        let ticket = LoadTicket {
            generation: self.generation,
            category,
        };
        if let Some(previous) = self.in_flight.replace(ticket) {
            tracing::debug!(
                superseded = previous.generation,
                generation = ticket.generation,
                "load superseded"
            );
        }

        self.loading = true;
        self.error = None;
        self.products.clear();
        self.refresh_taxonomy();
        self.refresh_visible();

        LoadRequest {
            ticket,
            category,
            category_tags: category.synonym_set(),
        }
    }

    /// Drop everything tied to a category and invalidate the in-flight load.
    fn reset_listing(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.loading = false;
        self.error = None;
        self.products.clear();
        self.taxonomy = None;
        self.visible.clear();
    }

    fn refresh_taxonomy(&mut self) {
        self.taxonomy = self
            .selection
            .category()
            .map(|category| resolve_taxonomy(category, &self.products));
    }

    fn reconcile_subcategory(&mut self) {
        let (Some(slug), Some(taxonomy)) = (self.selection.subcategory(), &self.taxonomy) else {
            return;
        };
        if !taxonomy.contains_slug(slug) {
            tracing::warn!(
                category = %taxonomy.category(),
                subcategory = %slug,
                "unknown subcategory, showing the whole category"
            );
            self.selection.clear_subcategory();
        }
    }

    fn refresh_visible(&mut self) {
        let filter = ProductFilter::from_selection(&self.selection, self.taxonomy.as_ref());
        self.visible = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect();
    }
}
