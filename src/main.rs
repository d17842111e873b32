use clap::Parser;
use store_analytics::core::engine::RunSummary;
use store_analytics::domain::ports::{DatasetSource, ReportSink};
use store_analytics::utils::{logger, validation::Validate};
use store_analytics::{
    AnalyticsEngine, CliConfig, ConsoleSink, CsvCatalogSource, FileSink, Result, SampleSource,
    StorePipeline, TomlDatasetSource,
};

fn build_source(cli: &CliConfig) -> Box<dyn DatasetSource> {
    let base: Box<dyn DatasetSource> = match &cli.data {
        Some(path) => Box::new(TomlDatasetSource::new(path)),
        None => Box::new(SampleSource),
    };

    match &cli.products {
        Some(path) => Box::new(CsvCatalogSource::new(path, base)),
        None => base,
    }
}

fn build_sink(cli: &CliConfig) -> Result<Box<dyn ReportSink>> {
    Ok(match &cli.output {
        Some(path) => Box::new(FileSink::create(path)?),
        None => Box::new(ConsoleSink),
    })
}

fn run(cli: &CliConfig) -> Result<RunSummary> {
    cli.validate()?;
    let config = cli.resolve()?;
    tracing::debug!("Resolved config: {:?}", config);

    let source = build_source(cli);
    tracing::info!("📂 Dataset: {}", source.describe());
    let sink = build_sink(cli)?;

    let pipeline = StorePipeline::new(source, sink, config);
    AnalyticsEngine::new(pipeline).run()
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} products, {} orders, {} visible cards",
                summary.products,
                summary.orders,
                summary.visible_cards
            );
            if let Some(path) = &cli.output {
                tracing::info!("📁 Report saved to: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Store analytics failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
