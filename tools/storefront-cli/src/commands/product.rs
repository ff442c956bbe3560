//! Show a single product.

use anyhow::{Context as _, Result};
use storefront_catalog::catalog::{MainCategory, Product};
use storefront_catalog::ids::ProductId;
use storefront_catalog::provider::CatalogProvider;

use super::ProductArgs;
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog
        .get_product(&ProductId::new(args.id.as_str()))
        .await
        .with_context(|| format!("Failed to look up product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("categories", &category_names(&product).join(", "));
    if !product.subcategory_tags.is_empty() {
        let subcategories: Vec<&str> = product.subcategory_tags.iter().map(String::as_str).collect();
        ctx.output.kv("subcategories", &subcategories.join(", "));
    }
    if let Some(price) = product.price_from() {
        ctx.output.kv("price from", &price.display());
    }
    if !product.short_description.is_empty() {
        ctx.output.info(&product.short_description);
    }

    if product.is_orderable() {
        ctx.output.header("Variante");
        for variant in &product.variants {
            ctx.output.table_row(
                &[
                    variant.id.as_str(),
                    &variant.label,
                    &variant.price.display(),
                    variant.unit.as_str(),
                ],
                &[12, 24, 24, 4],
            );
        }
    } else {
        ctx.output.warn("Product has no variants and cannot be ordered");
    }

    Ok(())
}

/// Main categories the product is listed under, or its raw tags when none
/// match.
fn category_names(product: &Product) -> Vec<String> {
    let names: Vec<String> = MainCategory::ALL
        .iter()
        .filter(|c| c.matches_tags(&product.category_tags))
        .map(|c| c.display_name().to_string())
        .collect();
    if names.is_empty() {
        product.category_tags.iter().cloned().collect()
    } else {
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        let product = Product::new("x", "Amorsa").with_category_tag("eco").with_category_tag("lavabile");
        assert_eq!(category_names(&product), vec!["Vopsele", "Izola\u{021b}ii"]);

        let product = Product::new("y", "Pensula").with_category_tag("accesorii");
        assert_eq!(category_names(&product), vec!["accesorii"]);
    }
}
