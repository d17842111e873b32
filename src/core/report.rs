use crate::config::StoreConfig;
use crate::domain::model::{Card, TopSeller, Totals};
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use crate::utils::money::format_money;

pub const CONFIG_HEADER: &str = "— CONFIG —";
pub const CARDS_HEADER: &str = "— CARDS (mapped) —";
pub const VISIBLE_HEADER: &str = "— VISIBLE CARDS (filtered) —";
pub const TOTALS_HEADER: &str = "— TOTALS (reduced) —";
pub const TOP_SELLER_HEADER: &str = "— TOP SELLER —";
pub const REPORT_HEADER: &str = "— REPORT —";

const STAR: &str = "⭐";

/// Writes lines to a sink and counts them.
pub struct ReportWriter<'a, S: ReportSink + ?Sized> {
    sink: &'a mut S,
    written: usize,
}

impl<'a, S: ReportSink + ?Sized> ReportWriter<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, written: 0 }
    }

    pub fn line(&mut self, line: &str) -> Result<()> {
        self.sink.write_line(line)?;
        self.written += 1;
        Ok(())
    }

    /// Section header, separated from the previous section by a blank line.
    pub fn section(&mut self, header: &str) -> Result<()> {
        if self.written > 0 {
            self.line("")?;
        }
        self.line(header)
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

pub fn config_lines(config: &StoreConfig) -> Vec<String> {
    config
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect()
}

/// Logs every declared config entry as `key: value`.
pub fn log_config<S: ReportSink + ?Sized>(
    config: &StoreConfig,
    out: &mut ReportWriter<'_, S>,
) -> Result<()> {
    config_lines(config).iter().try_for_each(|line| out.line(line))
}

pub fn card_line(card: &Card) -> String {
    let star = if card.is_highlighted {
        format!(" • {}", STAR)
    } else {
        String::new()
    };
    format!("{} • {} • {}{}", card.title, card.price_label, card.badge, star)
}

pub fn visible_card_line(card: &Card) -> String {
    format!("{} • {} • {}", card.title, card.price_label, card.badge)
}

/// `{ Electronics: 1682.49, Lifestyle: 24 }` with amounts in shortest form.
///
/// Always one line with bare keys, even for names like `Home Goods` that a JS
/// console would quote and for maps long enough that it would wrap.
pub fn category_summary(totals: &Totals) -> String {
    if totals.totals_by_category.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = totals
        .totals_by_category
        .iter()
        .map(|(category, amount)| format!("{}: {}", category, amount))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

pub fn totals_lines(totals: &Totals, currency: &str) -> Vec<String> {
    vec![
        format!("Units: {}", totals.units),
        format!("Revenue: {}", format_money(currency, totals.revenue)),
        format!(
            "Revenue (with tax): {}",
            format_money(currency, totals.revenue_with_tax)
        ),
        format!("By Category: {}", category_summary(totals)),
    ]
}

pub fn top_seller_lines(top: Option<&TopSeller>) -> Vec<String> {
    match top {
        Some(top) => vec![format!("{} (#{}): {} units", top.name, top.product_id, top.units)],
        None => vec!["No sales".to_string()],
    }
}

pub fn report_lines(cards: &[Card], totals: &Totals, currency: &str) -> Vec<String> {
    let mut lines = vec![
        format!("Products shown: {}", cards.len()),
        format!("Total units sold: {}", totals.units),
        format!("Revenue (net): {}", format_money(currency, totals.revenue)),
        format!(
            "Revenue (tax incl.): {}",
            format_money(currency, totals.revenue_with_tax)
        ),
        "Categories:".to_string(),
    ];

    for (category, amount) in &totals.totals_by_category {
        lines.push(format!("  - {}: {}", category, format_money(currency, *amount)));
    }

    lines.push(String::new());
    lines.push("Featured Products:".to_string());
    for card in cards {
        let star = if card.is_highlighted {
            format!("{} ", STAR)
        } else {
            String::new()
        };
        lines.push(format!(
            "  {}{} — {} ({})",
            star, card.title, card.price_label, card.badge
        ));
    }

    lines
}

/// Renders the REPORT section.
pub fn render_report<S: ReportSink + ?Sized>(
    cards: &[Card],
    totals: &Totals,
    currency: &str,
    out: &mut ReportWriter<'_, S>,
) -> Result<()> {
    out.section(REPORT_HEADER)?;
    for line in report_lines(cards, totals, currency) {
        out.line(&line)?;
    }
    Ok(())
}
