use crate::domain::model::{Dataset, Product};
use crate::domain::ports::DatasetSource;
use crate::domain::sample::sample_dataset;
use crate::utils::error::{AnalyticsError, Result};
use crate::utils::validation::{Validate, DATE_FORMAT};
use chrono::NaiveDate;
use std::path::PathBuf;

/// The built-in demo catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl DatasetSource for SampleSource {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    fn load(&self) -> Result<Dataset> {
        Ok(sample_dataset())
    }
}

/// A TOML file with `[[products]]` and `[[orders]]` tables.
#[derive(Debug, Clone)]
pub struct TomlDatasetSource {
    path: PathBuf,
}

impl TomlDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str, location: &str) -> Result<Dataset> {
        toml::from_str(content).map_err(|e| AnalyticsError::InvalidDataError {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

impl DatasetSource for TomlDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Dataset> {
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse(&content, &self.describe())
    }
}

/// Replaces the products of `base` with a CSV catalog
/// (`id,name,category,price,in_stock`). Orders still come from `base`.
#[derive(Debug, Clone)]
pub struct CsvCatalogSource<S: DatasetSource> {
    path: PathBuf,
    base: S,
}

impl<S: DatasetSource> CsvCatalogSource<S> {
    pub fn new(path: impl Into<PathBuf>, base: S) -> Self {
        Self {
            path: path.into(),
            base,
        }
    }

    pub fn read_products<R: std::io::Read>(reader: R) -> Result<Vec<Product>> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut products = Vec::new();
        for record in csv_reader.deserialize() {
            let product: Product = record?;
            products.push(product);
        }
        Ok(products)
    }
}

impl<S: DatasetSource> DatasetSource for CsvCatalogSource<S> {
    fn describe(&self) -> String {
        format!("{} + orders from {}", self.path.display(), self.base.describe())
    }

    fn load(&self) -> Result<Dataset> {
        let mut dataset = self.base.load()?;
        let file = std::fs::File::open(&self.path)?;
        dataset.products = Self::read_products(file)?;
        tracing::debug!(
            "Loaded {} products from {}",
            dataset.products.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}

impl Validate for Dataset {
    fn validate(&self) -> Result<()> {
        for product in &self.products {
            if !(product.price >= 0.0 && product.price.is_finite()) {
                return Err(AnalyticsError::InvalidDataError {
                    location: format!("product {}", product.id),
                    reason: format!("price must be a non-negative number, got {}", product.price),
                });
            }
        }

        for order in &self.orders {
            if NaiveDate::parse_from_str(&order.created_at, DATE_FORMAT).is_err() {
                return Err(AnalyticsError::InvalidDataError {
                    location: format!("order {}", order.id),
                    reason: format!("created_at '{}' is not a YYYY-MM-DD date", order.created_at),
                });
            }
            if let Some(item) = order.items.iter().find(|item| item.qty == 0) {
                return Err(AnalyticsError::InvalidDataError {
                    location: format!("order {}", order.id),
                    reason: format!("qty for product {} must be positive", item.product_id),
                });
            }
        }

        Ok(())
    }
}
