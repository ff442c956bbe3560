//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::provider::StaticCatalog;

use crate::config::StorefrontConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (StorefrontConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative paths in the config resolve against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve the configured catalog snapshot path.
    pub fn catalog_path(&self) -> PathBuf {
        resolve_path(&self.base_dir(), &self.config.catalog.path)
    }

    /// Read the catalog snapshot.
    pub fn load_catalog(&self) -> Result<StaticCatalog> {
        let path = self.catalog_path();
        self.output.debug(&format!("Loading catalog from {}", path.display()));
        let catalog = StaticCatalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog snapshot loaded");
        Ok(catalog)
    }
}

/// Find a config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<(PathBuf, StorefrontConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = StorefrontConfig::load(config_path.to_str()?) {
                    return Some((config_path, config));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Resolve `path` against `base` unless it is absolute.
pub fn resolve_path(base: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        base.join(path)
    }
}
