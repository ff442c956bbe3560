//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod product;
pub mod taxonomy;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Listing query string, e.g. "categorie=vopsele&subcategorie=elf-decor".
    #[arg(default_value = "")]
    pub query: String,

    /// Main category slug (overrides the query).
    #[arg(long)]
    pub category: Option<String>,

    /// Subcategory slug or name (overrides the query).
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Search term (overrides the query).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Retry a failed catalog load this many times.
    #[arg(long, default_value = "0")]
    pub retries: usize,

    /// Listing page path used for printed links.
    #[arg(long, default_value = "/produse")]
    pub path: String,
}

/// Arguments for the taxonomy command.
#[derive(Args)]
pub struct TaxonomyArgs {
    /// Main category slug (vopsele, izolatii).
    pub category: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Catalog snapshot path to write into the config.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}
