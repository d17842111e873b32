use crate::config::toml_config::TomlConfig;
use crate::config::{AnalyticsConfig, CardSort, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "store-analytics")]
#[command(about = "Mini store analytics: product cards, order totals and a summary report")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// TOML dataset with [[products]] and [[orders]] (defaults to the built-in sample)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// CSV product catalog (id,name,category,price,in_stock) replacing the dataset's products
    #[arg(long)]
    pub products: Option<PathBuf>,

    /// Search query for the visible cards
    #[arg(short, long)]
    pub query: Option<String>,

    /// Override store.show_out_of_stock
    #[arg(long)]
    pub show_out_of_stock: Option<bool>,

    /// Only aggregate orders created after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    #[arg(long, value_enum)]
    pub sort: Option<CardSort>,

    /// Add a top seller section after the totals
    #[arg(long)]
    pub top_seller: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and applies the command line on top of it.
    pub fn resolve(&self) -> Result<AnalyticsConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.into_config()?
            }
            None => AnalyticsConfig::default(),
        };

        self.apply_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AnalyticsConfig) -> Result<()> {
        if let Some(query) = &self.query {
            config.query = query.clone();
        }
        if let Some(show) = self.show_out_of_stock {
            tracing::info!("🔧 showOutOfStock overridden to: {}", show);
            config.store.show_out_of_stock = show;
        }
        if let Some(since) = &self.since {
            config.since = Some(validation::parse_date("--since", since)?);
        }
        if let Some(sort) = self.sort {
            config.sort = sort;
        }
        if self.top_seller {
            config.top_seller = true;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("--config", &self.config),
            ("--data", &self.data),
            ("--products", &self.products),
            ("--output", &self.output),
        ] {
            if let Some(path) = path {
                validation::validate_path(field, &path.to_string_lossy())?;
            }
        }
        Ok(())
    }
}
