pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::sink::{ConsoleSink, FileSink, MemorySink};
pub use adapters::source::{CsvCatalogSource, SampleSource, TomlDatasetSource};
pub use config::{AnalyticsConfig, CardSort, FilterOptions, OutputFormat, StoreConfig};
pub use crate::core::{engine::AnalyticsEngine, pipeline::StorePipeline};
pub use utils::error::{AnalyticsError, Result};
