use crate::config::{AnalyticsConfig, CardSort, OutputFormat, StoreConfig};
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of the config file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub store: Option<StoreSection>,
    pub filter: Option<FilterSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub currency: Option<String>,
    pub show_out_of_stock: Option<bool>,
    pub highlight_category: Option<String>,
    pub tax_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSection {
    pub query: Option<String>,
    pub sort: Option<CardSort>,
    pub since: Option<String>,
    pub top_seller: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnalyticsError::ConfigParseError {
            source_name: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnalyticsError::ConfigParseError {
            source_name: "env substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Layers the file over the defaults. Missing store keys are reported as warnings.
    pub fn into_config(self) -> Result<AnalyticsConfig> {
        let defaults = StoreConfig::default();
        let section = self.store.unwrap_or_default();

        let mut missing = Vec::new();
        if section.currency.is_none() {
            missing.push("currency");
        }
        if section.show_out_of_stock.is_none() {
            missing.push("show_out_of_stock");
        }
        if section.highlight_category.is_none() {
            missing.push("highlight_category");
        }
        if section.tax_rate.is_none() {
            missing.push("tax_rate");
        }
        for key in &missing {
            tracing::warn!("⚠️ store.{} not set, using default", key);
        }

        let store = StoreConfig {
            currency: section.currency.unwrap_or(defaults.currency),
            show_out_of_stock: section
                .show_out_of_stock
                .unwrap_or(defaults.show_out_of_stock),
            highlight_category: section
                .highlight_category
                .unwrap_or(defaults.highlight_category),
            tax_rate: section.tax_rate.unwrap_or(defaults.tax_rate),
        };

        let mut config = AnalyticsConfig {
            store,
            ..AnalyticsConfig::default()
        };

        if let Some(filter) = self.filter {
            if let Some(query) = filter.query {
                config.query = query;
            }
            if let Some(sort) = filter.sort {
                config.sort = sort;
            }
            if let Some(since) = filter.since {
                config.since = Some(validation::parse_date("filter.since", &since)?);
            }
            if let Some(top_seller) = filter.top_seller {
                config.top_seller = top_seller;
            }
        }

        if let Some(format) = self.output.and_then(|o| o.format) {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}
