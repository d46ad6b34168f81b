//! # Reports
//!
//! Printable views of validation and parse results, in text or JSON.
//!
//! ## Text Layout
//! ```text
//! samples/test.csv: 2 error(s)
//!   [header] row 0, column 0: Expected header to be named "Product name" but received test.
//!   [row] row 1, column -: Expected row to have 3 cells but received 2.
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cart_core::{calc_total, CartItem, ValidationError};
use serde::Serialize;
use serde_json::json;

use crate::config::ConfigError;

// =============================================================================
// Output Format
// =============================================================================

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("CART_PARSER_FORMAT".to_string())),
        }
    }
}

// =============================================================================
// Validation Report
// =============================================================================

/// Outcome of validating one file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(path: impl AsRef<Path>, errors: Vec<ValidationError>) -> Self {
        ValidationReport {
            path: path.as_ref().to_path_buf(),
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let path = self.path.display();
        if self.valid {
            return format!("{path}: OK");
        }

        let mut out = format!("{path}: {} error(s)", self.errors.len());
        for err in &self.errors {
            // Writing to a String cannot fail
            let _ = write!(out, "\n  {err}");
        }
        out
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Parsed items with their total.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl CartSummary {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = calc_total(&items);
        CartSummary { items, total }
    }

    /// Item count and total only.
    pub fn render_total(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&json!({
                "items": self.items.len(),
                "total": self.total,
            })),
            OutputFormat::Text => Ok(format!(
                "{} item(s), total {}",
                self.items.len(),
                self.total
            )),
        }
    }

    /// Every item followed by the total.
    pub fn render_items(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => {
                let mut out = String::new();
                for item in &self.items {
                    let _ = writeln!(
                        out,
                        "{} x {} @ {} = {}",
                        item.name,
                        item.quantity,
                        item.price,
                        item.line_total()
                    );
                }
                let _ = write!(out, "total {}", self.total);
                Ok(out)
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
