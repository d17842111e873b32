use anyhow::Result;
use store_analytics::config::toml_config::TomlConfig;
use store_analytics::domain::ports::DatasetSource;
use store_analytics::{
    AnalyticsEngine, AnalyticsError, CsvCatalogSource, FileSink, MemorySink, OutputFormat,
    SampleSource, StorePipeline, TomlDatasetSource,
};
use tempfile::TempDir;

const DATASET: &str = r#"
[[products]]
id = 10
name = "Desk Lamp"
category = "Home"
price = 35.5
in_stock = true

[[products]]
id = 11
name = "Tea Mug"
category = "Kitchen"
price = 8.25
in_stock = false

[[orders]]
id = "B1"
created_at = "2025-09-01"
items = [{ product_id = 10, qty = 2 }, { product_id = 11, qty = 4 }]

[[orders]]
id = "B2"
created_at = "2025-09-03"
items = [{ product_id = 99, qty = 1 }]
"#;

#[test]
fn test_config_and_dataset_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("analytics.toml");
    let data_path = temp_dir.path().join("store.toml");

    std::fs::write(
        &config_path,
        r#"
[store]
currency = "$"
show_out_of_stock = true
highlight_category = "Home"
tax_rate = 0.1

[filter]
query = ""
"#,
    )?;
    std::fs::write(&data_path, DATASET)?;

    let config = TomlConfig::from_file(&config_path)?.into_config()?;
    let sink = MemorySink::new();
    let pipeline = StorePipeline::new(TomlDatasetSource::new(&data_path), sink.clone(), config);
    let summary = AnalyticsEngine::new(pipeline).run()?;
    assert_eq!(summary.visible_cards, 2);

    let lines = sink.lines();
    assert_eq!(lines[1], "currency: $");
    assert_eq!(lines[4], "taxRate: 0.1");
    assert!(lines.contains(&"Desk Lamp • $35.50 • In Stock • ⭐".to_string()));
    assert!(lines.contains(&"Units: 6".to_string()));
    assert!(lines.contains(&"Revenue: $104.00".to_string()));
    assert!(lines.contains(&"Revenue (with tax): $114.40".to_string()));
    assert!(lines.contains(&"By Category: { Home: 71, Kitchen: 33 }".to_string()));
    assert!(lines.contains(&"  - Kitchen: $33.00".to_string()));
    assert!(lines.contains(&"  Tea Mug — $8.25 (Out of Stock)".to_string()));
    Ok(())
}

#[test]
fn test_csv_catalog_with_sample_orders() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("products.csv");
    std::fs::write(
        &csv_path,
        "id,name,category,price,in_stock\n\
         1,Laptop Pro 15,Electronics,1000,true\n\
         3,Mechanical Keyboard,Electronics,50,true\n",
    )?;

    let source = CsvCatalogSource::new(&csv_path, SampleSource);
    let dataset = source.load()?;
    assert_eq!(dataset.products.len(), 2);
    assert_eq!(dataset.orders.len(), 4);

    let config = TomlConfig::from_toml_str("[output]\nformat = \"json\"\n")?.into_config()?;
    assert_eq!(config.format, OutputFormat::Json);

    let sink = MemorySink::new();
    let pipeline = StorePipeline::new(source, sink.clone(), config);
    AnalyticsEngine::new(pipeline).run()?;

    let document: serde_json::Value = serde_json::from_str(&sink.lines().join("\n"))?;
    let totals = &document["analysis"]["totals"];
    // A100 laptop + keyboard, A102 keyboard; every other line item is unknown now
    assert_eq!(totals["units"], 3);
    assert_eq!(totals["revenue"], 1100.0);
    assert_eq!(totals["revenue_with_tax"], 1320.0);
    Ok(())
}

#[test]
fn test_broken_dataset_is_a_data_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("broken.toml");
    std::fs::write(&data_path, "[[products]]\nid = \"one\"\n")?;

    let pipeline = StorePipeline::new(
        TomlDatasetSource::new(&data_path),
        MemorySink::new(),
        Default::default(),
    );
    let err = AnalyticsEngine::new(pipeline).run().unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidDataError { .. }));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[test]
fn test_broken_dataset_keeps_existing_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_path = temp_dir.path().join("broken.toml");
    let report_path = temp_dir.path().join("report.txt");
    std::fs::write(&data_path, "[[products]]\nid = \"one\"\n")?;
    std::fs::write(&report_path, "yesterday's report\n")?;

    let pipeline = StorePipeline::new(
        TomlDatasetSource::new(&data_path),
        FileSink::create(&report_path)?,
        Default::default(),
    );
    assert!(AnalyticsEngine::new(pipeline).run().is_err());
    assert_eq!(std::fs::read_to_string(&report_path)?, "yesterday's report\n");
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let err = TomlConfig::from_file("/definitely/not/here/analytics.toml").unwrap_err();
    assert!(matches!(err, AnalyticsError::IoError(_)));
}
