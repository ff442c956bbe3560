//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Contents of `storefront.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog snapshot location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Catalog snapshot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON snapshot path, relative to the config file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Log format on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable lines.
    #[default]
    Human,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `storefront_nav=debug`.
    /// `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Storefront catalog configuration

[catalog]
# JSON snapshot, relative to this file
path = "{catalog_path}"

[logging]
# EnvFilter directive; RUST_LOG overrides it
level = "info"
# "human" or "json"
format = "human"
"#,
        catalog_path = catalog_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config("data/catalog.json")).unwrap();
        assert_eq!(config.catalog.path, "data/catalog.json");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: StorefrontConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.catalog.path = "produse.json".to_string();
        config.logging.format = LogFormat::Json;

        for name in ["storefront.toml", "storefront.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            config.save(path).unwrap();
            assert_eq!(StorefrontConfig::load(path).unwrap(), config);
        }
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[catalog\npath = 1").unwrap();

        let err = StorefrontConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }
}
