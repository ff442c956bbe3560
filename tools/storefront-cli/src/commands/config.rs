//! Configuration management commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use storefront_catalog::catalog::{MainCategory, Product};
use storefront_nav::taxonomy::priority_order;
use storefront_nav::validate_taxonomy;
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);
    ctx.output.kv("resolved", &ctx.catalog_path().display().to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Config unchanged");
            return Ok(());
        }
    }

    std::fs::write(&config_path, generate_default_config(catalog))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    if let Err(e) = EnvFilter::try_new(&ctx.config.logging.level) {
        errors.push(format!("logging.level '{}' is invalid: {}", ctx.config.logging.level, e));
    }

    match ctx.load_catalog() {
        Ok(catalog) => {
            ctx.output.kv("products", &catalog.len().to_string());
            let (catalog_errors, catalog_warnings) = check_catalog(catalog.products());
            errors.extend(catalog_errors);
            warnings.extend(catalog_warnings);
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Check every category's subcategory names for slug collisions and flag
/// products the listing page can never show or sell.
fn check_catalog(products: &[Product]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for category in MainCategory::ALL {
        let mut names: Vec<&str> = priority_order(category).to_vec();
        for product in products.iter().filter(|p| category.matches_tags(&p.category_tags)) {
            names.extend(product.subcategory_tags.iter().map(String::as_str));
        }
        if let Err(e) = validate_taxonomy(category, names) {
            errors.push(e.to_string());
        }
    }

    for product in products {
        if !MainCategory::ALL.iter().any(|c| c.matches_tags(&product.category_tags)) {
            warnings.push(format!("product {} is not in any main category", product.id));
        }
        if !product.is_orderable() {
            warnings.push(format!("product {} has no variants", product.id));
        }
    }

    (errors, warnings)
}
