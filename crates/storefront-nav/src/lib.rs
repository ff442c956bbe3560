//! Catalog navigation engine for the storefront product listing page.
//!
//! Keeps four things consistent while the shopper clicks, navigates
//! back/forward or deep-links into a subcategory:
//!
//! - the URL query string (`categorie`, `subcategorie`, `cautare`)
//! - the in-memory selection (main category, subcategory, search term)
//! - the asynchronously loaded product set for the selected category
//! - the category -> subcategory taxonomy with its fixed display order
//!
//! The URL is the source of truth: `SelectionState` is parsed from it and
//! serialized back to it on every transition. `NavigationController`
//! orchestrates catalog loads and exposes the derived subcategory pills and
//! visible products to the rendering layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_nav::NavigationController;
//!
//! let (mut nav, dispatch) =
//!     NavigationController::from_query_string("?categorie=vopsele&subcategorie=elf-decor");
//! if let Some(request) = dispatch.load {
//!     nav.load(&catalog, request).await;
//! }
//! for product in nav.visible_products() {
//!     println!("{}", product.title);
//! }
//! ```

pub mod controller;
pub mod error;
pub mod filter;
pub mod query;
pub mod selection;
pub mod slug;
pub mod taxonomy;
pub mod view;

pub use controller::{Dispatch, LoadOutcome, LoadRequest, LoadTicket, NavigationController};
pub use error::NavError;
pub use filter::{filter_products, ProductFilter};
pub use selection::{SelectionPhase, SelectionState};
pub use slug::slugify;
pub use taxonomy::{resolve_taxonomy, validate_taxonomy, Subcategory, Taxonomy};
pub use view::{ListingStatus, PageView};
