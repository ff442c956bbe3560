//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_catalog::catalog::Product;
use storefront_nav::{ListingStatus, Subcategory};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print one subcategory pill with its slug and product count.
    pub fn pill(&self, sub: &Subcategory, selected: bool) {
        if self.json {
            return;
        }
        let name = if selected {
            style(format!("[{}]", sub.display_name)).cyan().bold().to_string()
        } else {
            format!(" {} ", sub.display_name)
        };
        println!(
            "  {:30} {:28} {}",
            name,
            style(&sub.id).dim(),
            style(sub.product_count).dim()
        );
    }

    /// Print one listing line: id, title and starting price.
    pub fn product_line(&self, product: &Product) {
        if self.json {
            return;
        }
        let price = product
            .price_from()
            .map(|m| format!("de la {}", m.display()))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:24} {:40} {}",
            style(product.id.as_str()).dim(),
            product.title,
            style(price).green()
        );
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Styled one-line summary of the listing area.
pub fn status_badge(status: &ListingStatus) -> String {
    match status {
        ListingStatus::Idle => style("choose a category").dim().to_string(),
        ListingStatus::Loading => style("loading").yellow().to_string(),
        ListingStatus::Failed { message } => style(format!("failed: {}", message)).red().to_string(),
        ListingStatus::NoMatches => style("no matching products").yellow().to_string(),
        ListingStatus::Ready { count } => style(format!("{} product(s)", count)).green().to_string(),
    }
}
