//! Navigation controller scenarios against scripted catalog providers.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use pretty_assertions::assert_eq;
use storefront_catalog::prelude::*;
use storefront_nav::{
    ListingStatus, LoadOutcome, NavigationController, PageView, SelectionPhase,
};

fn fixture() -> Vec<Product> {
    vec![
        Product::new("p1", "Vopsea lavabila alba")
            .with_category_tag("vopsele")
            .with_subcategory_tag("Vopsele lavabile"),
        Product::new("p2", "Decor Venetian")
            .with_category_tag("vopsele decorative")
            .with_subcategory_tag("ELF Decor"),
        Product::new("p3", "Lac pentru lemn")
            .with_category_tag("vopsele")
            .with_subcategory_tag("Lacuri"),
        Product::new("i1", "Spuma poliuretanica")
            .with_category_tag("izola\u{021b}ii")
            .with_subcategory_tag("ADEZIVI&CHITURI"),
        Product::new("i2", "Membrana bituminoasa")
            .with_category_tag("eco")
            .with_subcategory_tag("MATERIALE HIDROIZOLANTE"),
    ]
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

/// Answers requests containing `slow_tag` only after `delay`.
struct SlowCatalog {
    inner: StaticCatalog,
    slow_tag: &'static str,
    delay: Duration,
}

#[async_trait]
impl CatalogProvider for SlowCatalog {
    async fn list_products(&self, category_tags: &BTreeSet<String>) -> CatalogResult<Vec<Product>> {
        if category_tags.contains(self.slow_tag) {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.list_products(category_tags).await
    }

    async fn get_product(&self, id: &ProductId) -> CatalogResult<Product> {
        self.inner.get_product(id).await
    }
}

/// Fails the first `failures` requests containing `tag`.
struct FlakyCatalog {
    inner: StaticCatalog,
    tag: &'static str,
    failures: AtomicUsize,
}

impl FlakyCatalog {
    fn new(tag: &'static str, failures: usize) -> Self {
        Self {
            inner: StaticCatalog::new(fixture()),
            tag,
            failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl CatalogProvider for FlakyCatalog {
    async fn list_products(&self, category_tags: &BTreeSet<String>) -> CatalogResult<Vec<Product>> {
        if category_tags.contains(self.tag) {
            let left = self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if left.is_ok() {
                return Err(CatalogError::Unavailable("upstream returned 503".to_string()));
            }
        }
        self.inner.list_products(category_tags).await
    }

    async fn get_product(&self, id: &ProductId) -> CatalogResult<Product> {
        self.inner.get_product(id).await
    }
}

#[tokio::test]
async fn test_category_lists_only_its_products() {
    let catalog = StaticCatalog::new(fixture());
    let (mut nav, dispatch) = NavigationController::from_query_string("?categorie=vopsele");

    let request = dispatch.load.unwrap();
    assert_eq!(nav.load(&catalog, request).await, LoadOutcome::Applied);
    assert_eq!(ids(&nav.visible_products()), vec!["p1", "p2", "p3"]);
    assert_eq!(nav.page_view(), PageView::SubcategoryPicker(MainCategory::Paints));
}

#[tokio::test]
async fn test_slow_first_response_is_discarded() {
    let catalog = SlowCatalog {
        inner: StaticCatalog::new(fixture()),
        slow_tag: "vopsele",
        delay: Duration::from_millis(50),
    };
    let mut nav = NavigationController::new();

    let paints = nav.select_category(MainCategory::Paints).load.unwrap();
    let insulation = nav.select_category(MainCategory::Insulation).load.unwrap();

    let mut responses = FuturesUnordered::new();
    for request in [paints, insulation] {
        let catalog = &catalog;
        responses.push(async move {
            let result = catalog.list_products(&request.category_tags).await;
            (request.ticket, result)
        });
    }

    let mut outcomes = Vec::new();
    while let Some((ticket, result)) = responses.next().await {
        outcomes.push((ticket.category(), nav.complete_load(ticket, result)));
    }

    assert_eq!(
        outcomes,
        vec![
            (MainCategory::Insulation, LoadOutcome::Applied),
            (MainCategory::Paints, LoadOutcome::Stale),
        ]
    );
    assert_eq!(nav.selection().category(), Some(MainCategory::Insulation));
    assert_eq!(ids(&nav.visible_products()), vec!["i1", "i2"]);
    assert!(nav.products().iter().all(|p| MainCategory::Insulation.matches_tags(&p.category_tags)));
}

#[tokio::test]
async fn test_failed_load_keeps_default_pills() {
    let catalog = FlakyCatalog::new("izolatii", 1);
    let mut nav = NavigationController::new();

    let request = nav.select_category(MainCategory::Insulation).load.unwrap();
    assert_eq!(nav.load(&catalog, request).await, LoadOutcome::Failed);

    let pills: Vec<&str> = nav.subcategories().iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(
        pills,
        vec!["IZOLATII ECO-FRIENDLY", "MATERIALE HIDROIZOLANTE", "ADEZIVI&CHITURI"]
    );
    assert!(nav.visible_products().is_empty());
    assert!(!nav.is_loading());
    assert_eq!(
        nav.listing_status(),
        ListingStatus::Failed {
            message: "Catalog unavailable: upstream returned 503".to_string()
        }
    );
    assert_eq!(nav.page_view(), PageView::SubcategoryPicker(MainCategory::Insulation));
}

#[tokio::test]
async fn test_retry_after_failure() {
    let catalog = FlakyCatalog::new("izolatii", 1);
    let mut nav = NavigationController::new();

    let request = nav.select_category(MainCategory::Insulation).load.unwrap();
    nav.load(&catalog, request).await;
    assert!(nav.error().is_some());

    let retry = nav.retry().unwrap();
    assert_eq!(retry.query, "categorie=izolatii");
    assert_eq!(nav.listing_status(), ListingStatus::Loading);

    assert_eq!(nav.load(&catalog, retry.load.unwrap()).await, LoadOutcome::Applied);
    assert_eq!(nav.error(), None);
    assert_eq!(nav.listing_status(), ListingStatus::Ready { count: 2 });
}

#[tokio::test]
async fn test_deep_link_to_subcategory() {
    let catalog = StaticCatalog::new(fixture());
    let (mut nav, dispatch) =
        NavigationController::from_query_string("?categorie=vopsele&subcategorie=lacuri&cautare=lemn");

    // "Lacuri" is not a default pill; the slug is held until products arrive.
    assert!(nav.is_loading());
    assert_eq!(nav.selection().subcategory(), Some("lacuri"));
    assert_eq!(dispatch.query, "categorie=vopsele&subcategorie=lacuri&cautare=lemn");

    nav.load(&catalog, dispatch.load.unwrap()).await;
    assert_eq!(nav.selection().phase(), SelectionPhase::SubcategorySelected);
    assert_eq!(nav.page_view(), PageView::ProductList(MainCategory::Paints));
    assert_eq!(ids(&nav.visible_products()), vec!["p3"]);
    assert_eq!(nav.query_string(), "categorie=vopsele&subcategorie=lacuri&cautare=lemn");
}

#[tokio::test]
async fn test_deep_link_to_unknown_subcategory_downgrades() {
    let catalog = StaticCatalog::new(fixture());
    let (mut nav, dispatch) =
        NavigationController::from_query_string("categorie=vopsele&subcategorie=scule");
    assert_eq!(nav.selection().subcategory(), Some("scule"));

    nav.load(&catalog, dispatch.load.unwrap()).await;
    assert_eq!(nav.selection().subcategory(), None);
    assert_eq!(nav.query_string(), "categorie=vopsele");
    assert_eq!(nav.visible_products().len(), 3);
}

#[tokio::test]
async fn test_deep_link_survives_failed_load_when_default() {
    let catalog = FlakyCatalog::new("vopsele", 2);

    let (mut nav, dispatch) =
        NavigationController::from_query_string("categorie=vopsele&subcategorie=elf-decor");
    nav.load(&catalog, dispatch.load.unwrap()).await;
    assert_eq!(nav.selection().subcategory(), Some("elf-decor"));

    let (mut nav, dispatch) =
        NavigationController::from_query_string("categorie=vopsele&subcategorie=lacuri");
    nav.load(&catalog, dispatch.load.unwrap()).await;
    assert_eq!(nav.selection().subcategory(), None);
    assert!(nav.listing_status().is_failed());
}

#[tokio::test]
async fn test_back_and_forward() {
    let catalog = StaticCatalog::new(fixture());
    let mut nav = NavigationController::new();

    let request = nav.select_category(MainCategory::Paints).load.unwrap();
    nav.load(&catalog, request).await;
    let category_page = nav.query_string();
    let product_page = nav.select_subcategory("ELF Decor").unwrap().query;
    assert_eq!(product_page, "categorie=vopsele&subcategorie=elf-decor");

    // Back: same category, no reload.
    let dispatch = nav.handle_url_change(&category_page);
    assert!(dispatch.load.is_none());
    assert_eq!(nav.page_view(), PageView::SubcategoryPicker(MainCategory::Paints));
    assert_eq!(nav.visible_products().len(), 3);

    // Forward.
    let dispatch = nav.handle_url_change(&product_page);
    assert!(dispatch.load.is_none());
    assert_eq!(ids(&nav.visible_products()), vec!["p2"]);

    // Back to the landing page.
    let dispatch = nav.handle_url_change("");
    assert!(dispatch.load.is_none());
    assert_eq!(nav.page_view(), PageView::CategoryPicker);
    assert!(nav.subcategories().is_empty());

    // Forward again reloads the category.
    let dispatch = nav.handle_url_change(&product_page);
    let request = dispatch.load.unwrap();
    assert_eq!(request.category, MainCategory::Paints);
    nav.load(&catalog, request).await;
    assert_eq!(ids(&nav.visible_products()), vec!["p2"]);
}

#[tokio::test]
async fn test_url_switch_between_categories_while_loading() {
    let catalog = StaticCatalog::new(fixture());
    let (mut nav, first) = NavigationController::from_query_string("categorie=vopsele");
    let second = nav.handle_url_change("categorie=izolatii&subcategorie=adezivichituri");

    assert_eq!(nav.load(&catalog, first.load.unwrap()).await, LoadOutcome::Stale);
    assert!(nav.is_loading());

    assert_eq!(nav.load(&catalog, second.load.unwrap()).await, LoadOutcome::Applied);
    assert_eq!(ids(&nav.visible_products()), vec!["i1"]);
}
