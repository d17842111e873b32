use crate::core::Pipeline;
use crate::utils::error::Result;

/// Summary of one engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub products: usize,
    pub orders: usize,
    pub visible_cards: usize,
    pub lines_written: usize,
}

pub struct AnalyticsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalyticsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting store analytics");

        // Extract
        let dataset = self.pipeline.extract()?;
        let products = dataset.products.len();
        let orders = dataset.orders.len();
        tracing::info!("📦 Extracted {} products and {} orders", products, orders);

        // Transform
        let analysis = self.pipeline.transform(dataset)?;
        let visible_cards = analysis.visible_cards.len();
        tracing::info!(
            "🔄 Mapped {} cards, {} visible, {} units sold",
            analysis.cards.len(),
            visible_cards,
            analysis.totals.units
        );

        // Load
        let lines_written = self.pipeline.load(analysis)?;
        tracing::info!("📝 Wrote {} report lines", lines_written);

        Ok(RunSummary {
            products,
            orders,
            visible_cards,
            lines_written,
        })
    }
}
