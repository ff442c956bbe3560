//! Print the subcategory pills of a main category.

use anyhow::{anyhow, Result};
use storefront_catalog::catalog::MainCategory;
use storefront_catalog::provider::CatalogProvider;
use storefront_nav::{resolve_taxonomy, Taxonomy};

use super::TaxonomyArgs;
use crate::context::Context;

/// Run the taxonomy command.
pub async fn run(args: TaxonomyArgs, ctx: &Context) -> Result<()> {
    let category = parse_category(&args.category)?;
    let catalog = ctx.load_catalog()?;
    let taxonomy = load_taxonomy(&catalog, category).await;

    if ctx.output.is_json() {
        ctx.output.json(&taxonomy);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", category.display_name(), category.slug()));
    ctx.output.table_row(&["#", "Name", "Slug", "Products"], &[3, 28, 28, 8]);
    for sub in taxonomy.iter() {
        let rank = sub
            .ordinal
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        let count = sub.product_count.to_string();
        ctx.output
            .table_row(&[&rank, &sub.display_name, &sub.id, &count], &[3, 28, 28, 8]);
    }

    Ok(())
}

pub(crate) fn parse_category(slug: &str) -> Result<MainCategory> {
    MainCategory::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = MainCategory::ALL.iter().map(|c| c.slug()).collect();
        anyhow!("Unknown category '{}'. Expected one of: {}", slug, known.join(", "))
    })
}

/// Resolve the taxonomy from the category's products. A failed load falls
/// back to the default list, like the listing page.
pub(crate) async fn load_taxonomy<P>(catalog: &P, category: MainCategory) -> Taxonomy
where
    P: CatalogProvider + ?Sized,
{
    match catalog.list_products(&category.synonym_set()).await {
        Ok(products) => resolve_taxonomy(category, &products),
        Err(e) => {
            tracing::warn!(category = %category, error = %e, "catalog load failed, using defaults");
            resolve_taxonomy(category, &[])
        }
    }
}
