//! Resolve a listing query the way the product listing page does.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::catalog::Product;
use storefront_catalog::provider::CatalogProvider;
use storefront_nav::{
    ListingStatus, LoadOutcome, NavigationController, PageView, SelectionState, Subcategory,
};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{status_badge, Output};

/// Machine-readable page snapshot for `--json`.
#[derive(Serialize)]
struct PageReport<'a> {
    query: String,
    href: String,
    view: PageView,
    status: ListingStatus,
    selection: &'a SelectionState,
    subcategories: &'a [Subcategory],
    products: Vec<&'a Product>,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let nav = navigate(&catalog, &args, &ctx.output).await?;

    let report = PageReport {
        query: nav.query_string(),
        href: nav.selection().href(&args.path),
        view: nav.page_view(),
        status: nav.listing_status(),
        selection: nav.selection(),
        subcategories: nav.subcategories(),
        products: nav.visible_products(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        print_report(&report, &ctx.output);
    }

    Ok(())
}

/// Build the controller from the query, apply flag overrides and settle
/// the catalog load.
async fn navigate<P>(catalog: &P, args: &BrowseArgs, output: &Output) -> Result<NavigationController>
where
    P: CatalogProvider + ?Sized,
{
    let (mut nav, dispatch) = NavigationController::from_query_string(&args.query);
    let mut pending = dispatch.load;

    if let Some(slug) = &args.category {
        pending = nav.select_category_slug(slug)?.load;
    }
    if let Some(search) = &args.search {
        nav.set_search(search.as_str());
    }

    let mut attempts = 0;
    while let Some(request) = pending.take() {
        let spinner = output.spinner(&format!("Loading {}...", request.category.display_name()));
        let outcome = nav.load(catalog, request).await;
        spinner.finish_and_clear();

        if outcome == LoadOutcome::Failed && attempts < args.retries {
            attempts += 1;
            output.warn(&format!(
                "Catalog load failed, retrying ({}/{})",
                attempts, args.retries
            ));
            pending = nav.retry().and_then(|d| d.load);
        }
    }

    // Subcategories are validated against the loaded taxonomy.
    if let Some(sub) = &args.subcategory {
        nav.select_subcategory(sub)?;
    }

    Ok(nav)
}

fn print_report(report: &PageReport<'_>, output: &Output) {
    let title = match report.view {
        PageView::CategoryPicker => "Categorii".to_string(),
        PageView::SubcategoryPicker(c) | PageView::ProductList(c) => c.display_name().to_string(),
    };
    output.header(&title);
    output.kv("url", &report.href);
    if !report.selection.search().is_empty() {
        output.kv("search", report.selection.search());
    }
    output.kv("status", &status_badge(&report.status));

    if let PageView::CategoryPicker = report.view {
        for category in storefront_catalog::catalog::MainCategory::ALL {
            output.list_item(&format!("{} ({})", category.display_name(), category.slug()));
        }
        return;
    }

    output.header("Subcategorii");
    let selected = report.selection.subcategory();
    for sub in report.subcategories {
        output.pill(sub, selected == Some(sub.id.as_str()));
    }

    if report.status.is_failed() {
        output.warn("Showing default subcategories; rerun with --retries to try again");
    }

    if report.products.is_empty() {
        return;
    }

    output.header("Produse");
    for product in &report.products {
        output.product_line(product);
    }
}
