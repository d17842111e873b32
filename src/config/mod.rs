#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_HIGHLIGHT_CATEGORY: &str = "Electronics";
pub const DEFAULT_TAX_RATE: f64 = 0.2;
pub const DEFAULT_QUERY: &str = "electronics";

/// Store-wide settings shared by the mapper, the aggregator and the config dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub currency: String,
    pub show_out_of_stock: bool,
    pub highlight_category: String,
    /// Fraction, 0.2 = 20%.
    pub tax_rate: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            show_out_of_stock: false,
            highlight_category: DEFAULT_HIGHLIGHT_CATEGORY.to_string(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl StoreConfig {
    /// Declared fields in declaration order, keyed by their display names.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.clone()),
            ("showOutOfStock", self.show_out_of_stock.to_string()),
            ("highlightCategory", self.highlight_category.clone()),
            ("taxRate", self.tax_rate.to_string()),
        ]
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("store.currency", &self.currency)?;
        validation::validate_non_empty_string(
            "store.highlight_category",
            &self.highlight_category,
        )?;
        validation::validate_range("store.tax_rate", self.tax_rate, 0.0, 1.0)?;
        Ok(())
    }
}

/// Card search options. `query` is matched case-insensitively after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub query: String,
    pub show_out_of_stock: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CardSort {
    #[default]
    None,
    Name,
    Price,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything one run needs, resolved from defaults, the config file and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub store: StoreConfig,
    pub query: String,
    pub sort: CardSort,
    /// Only orders created strictly after this date are aggregated.
    pub since: Option<NaiveDate>,
    pub top_seller: bool,
    pub format: OutputFormat,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            query: DEFAULT_QUERY.to_string(),
            sort: CardSort::None,
            since: None,
            top_seller: false,
            format: OutputFormat::Text,
        }
    }
}

impl AnalyticsConfig {
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            query: self.query.clone(),
            show_out_of_stock: self.store.show_out_of_stock,
        }
    }
}

impl Validate for AnalyticsConfig {
    fn validate(&self) -> Result<()> {
        self.store.validate()
    }
}
