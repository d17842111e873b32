use crate::config::{AnalyticsConfig, OutputFormat};
use crate::core::cards::{filter_cards, map_to_cards, sort_cards};
use crate::core::report::{
    self, ReportWriter, CARDS_HEADER, CONFIG_HEADER, TOP_SELLER_HEADER, TOTALS_HEADER,
    VISIBLE_HEADER,
};
use crate::core::totals::{compute_totals, orders_since, top_seller, ProductIndex};
use crate::core::{Analysis, Dataset, DatasetSource, Pipeline, ReportSink};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// config → map → filter → aggregate → render, over one dataset source and one sink.
pub struct StorePipeline<S: DatasetSource, K: ReportSink> {
    source: S,
    sink: K,
    config: AnalyticsConfig,
}

impl<S: DatasetSource, K: ReportSink> StorePipeline<S, K> {
    pub fn new(source: S, sink: K, config: AnalyticsConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    fn render_text(&mut self, analysis: &Analysis) -> Result<usize> {
        let store = &self.config.store;
        let mut out = ReportWriter::new(&mut self.sink);

        out.section(CONFIG_HEADER)?;
        report::log_config(store, &mut out)?;

        out.section(CARDS_HEADER)?;
        analysis
            .cards
            .iter()
            .try_for_each(|card| out.line(&report::card_line(card)))?;

        out.section(VISIBLE_HEADER)?;
        analysis
            .visible_cards
            .iter()
            .try_for_each(|card| out.line(&report::visible_card_line(card)))?;

        out.section(TOTALS_HEADER)?;
        for line in report::totals_lines(&analysis.totals, &store.currency) {
            out.line(&line)?;
        }

        if self.config.top_seller {
            out.section(TOP_SELLER_HEADER)?;
            for line in report::top_seller_lines(analysis.top_seller.as_ref()) {
                out.line(&line)?;
            }
        }

        report::render_report(
            &analysis.visible_cards,
            &analysis.totals,
            &store.currency,
            &mut out,
        )?;

        Ok(out.written())
    }

    fn render_json(&mut self, analysis: &Analysis) -> Result<usize> {
        let document = serde_json::json!({
            "config": self.config.store,
            "analysis": analysis,
        });
        let text = serde_json::to_string_pretty(&document)?;
        let mut out = ReportWriter::new(&mut self.sink);
        for line in text.lines() {
            out.line(line)?;
        }
        Ok(out.written())
    }
}

impl<S: DatasetSource, K: ReportSink> Pipeline for StorePipeline<S, K> {
    fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Reading dataset from {}", self.source.describe());
        let dataset = self.source.load()?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn transform(&self, data: Dataset) -> Result<Analysis> {
        let store = &self.config.store;

        let cards = map_to_cards(&data.products, store);
        let mut visible_cards = filter_cards(&cards, &self.config.filter_options());
        sort_cards(&mut visible_cards, self.config.sort, &data.products);

        let index = ProductIndex::new(&data.products);
        let orders = orders_since(&data.orders, self.config.since);
        if let Some(since) = self.config.since {
            tracing::info!(
                "📅 {} of {} orders created after {}",
                orders.len(),
                data.orders.len(),
                since
            );
        }

        let totals = compute_totals(&orders, &index, store.tax_rate);
        let top_seller = if self.config.top_seller {
            top_seller(&orders, &index)
        } else {
            None
        };

        Ok(Analysis {
            cards,
            visible_cards,
            totals,
            top_seller,
        })
    }

    fn load(&mut self, analysis: Analysis) -> Result<usize> {
        let written = match self.config.format {
            OutputFormat::Text => self.render_text(&analysis)?,
            OutputFormat::Json => self.render_json(&analysis)?,
        };
        self.sink.finish()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::adapters::source::SampleSource;
    use crate::config::CardSort;
    use crate::domain::model::LineItem;
    use crate::domain::sample::sample_dataset;

    struct FixedSource(Dataset);

    impl DatasetSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> Result<Dataset> {
            Ok(self.0.clone())
        }
    }

    fn pipeline(config: AnalyticsConfig) -> StorePipeline<SampleSource, MemorySink> {
        StorePipeline::new(SampleSource, MemorySink::new(), config)
    }

    #[test]
    fn test_transform_sample() {
        let pipeline = pipeline(AnalyticsConfig::default());
        let data = pipeline.extract().unwrap();
        let analysis = pipeline.transform(data).unwrap();

        assert_eq!(analysis.cards.len(), 6);
        assert_eq!(analysis.visible_cards.len(), 2);
        assert_eq!(analysis.totals.units, 14);
        assert_eq!(analysis.totals.revenue, 1725.99);
        assert!(analysis.top_seller.is_none());
    }

    #[test]
    fn test_transform_with_since_and_top_seller() {
        let config = AnalyticsConfig {
            since: chrono::NaiveDate::from_ymd_opt(2025, 8, 11),
            top_seller: true,
            ..AnalyticsConfig::default()
        };
        let pipeline = pipeline(config);
        let analysis = pipeline.transform(sample_dataset()).unwrap();

        // A102 + A103
        assert_eq!(analysis.totals.units, 4);
        assert_eq!(analysis.totals.revenue, 127.5);
        assert_eq!(analysis.totals.revenue_with_tax, 153.0);
        let top = analysis.top_seller.unwrap();
        assert_eq!(top.name, "Water Bottle");
        assert_eq!(top.units, 2);
    }

    #[test]
    fn test_transform_sorts_visible_cards() {
        let config = AnalyticsConfig {
            query: String::new(),
            sort: CardSort::Price,
            ..AnalyticsConfig::default()
        };
        let analysis = pipeline(config).transform(sample_dataset()).unwrap();

        let titles: Vec<&str> = analysis
            .visible_cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Pencil", "Notebook", "Water Bottle", "Mechanical Keyboard", "Laptop Pro 15"]
        );
        // mapped cards keep catalog order
        assert_eq!(analysis.cards[0].title, "Laptop Pro 15");
    }

    #[test]
    fn test_extract_rejects_invalid_dataset() {
        let mut dataset = sample_dataset();
        dataset.orders[0].items.push(LineItem { product_id: 1, qty: 0 });
        let pipeline = StorePipeline::new(
            FixedSource(dataset),
            MemorySink::new(),
            AnalyticsConfig::default(),
        );

        assert!(pipeline.extract().is_err());
    }

    #[test]
    fn test_load_json() {
        let sink = MemorySink::new();
        let config = AnalyticsConfig {
            format: OutputFormat::Json,
            ..AnalyticsConfig::default()
        };
        let mut pipeline = StorePipeline::new(SampleSource, sink.clone(), config);
        let analysis = pipeline.transform(sample_dataset()).unwrap();
        let written = pipeline.load(analysis).unwrap();

        let lines = sink.lines();
        assert_eq!(written, lines.len());

        let document: serde_json::Value = serde_json::from_str(&lines.join("\n")).unwrap();
        assert_eq!(document["config"]["currency"], "€");
        assert_eq!(document["analysis"]["totals"]["units"], 14);
        assert_eq!(
            document["analysis"]["totals"]["totals_by_category"]["Stationery"],
            19.5
        );
        assert!(document["analysis"].get("top_seller").is_none());
    }

    #[test]
    fn test_load_text_top_seller_section() {
        let sink = MemorySink::new();
        let config = AnalyticsConfig {
            top_seller: true,
            ..AnalyticsConfig::default()
        };
        let mut pipeline = StorePipeline::new(SampleSource, sink.clone(), config);
        let analysis = pipeline.transform(sample_dataset()).unwrap();
        pipeline.load(analysis).unwrap();

        let lines = sink.lines();
        let at = lines.iter().position(|l| l == TOP_SELLER_HEADER).unwrap();
        assert_eq!(lines[at + 1], "Pencil (#6): 5 units");
        assert_eq!(lines[at + 2], "");
        assert_eq!(lines[at + 3], "— REPORT —");
    }
}
