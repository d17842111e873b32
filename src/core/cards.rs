use crate::config::{CardSort, FilterOptions, StoreConfig};
use crate::domain::model::{Card, Product};
use crate::utils::money::format_money;

pub const IN_STOCK: &str = "In Stock";
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// One card per product, same order.
pub fn map_to_cards(products: &[Product], config: &StoreConfig) -> Vec<Card> {
    products
        .iter()
        .map(|p| Card {
            id: p.id,
            title: p.name.clone(),
            price_label: format_money(&config.currency, p.price),
            badge: if p.in_stock { IN_STOCK } else { OUT_OF_STOCK }.to_string(),
            is_highlighted: p.category == config.highlight_category,
            category: p.category.clone(),
            in_stock: p.in_stock,
        })
        .collect()
}

/// Order-preserving subset of `cards` matching stock visibility and the query.
pub fn filter_cards(cards: &[Card], options: &FilterOptions) -> Vec<Card> {
    let q = options.query.trim().to_lowercase();

    cards
        .iter()
        .filter(|c| options.show_out_of_stock || c.in_stock)
        .filter(|c| {
            q.is_empty()
                || c.title.to_lowercase().contains(&q)
                || c.category.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// Stable sort; ties keep their filtered order.
pub fn sort_cards(cards: &mut [Card], sort: CardSort, products: &[Product]) {
    match sort {
        CardSort::None => {}
        CardSort::Name => cards.sort_by(|a, b| a.title.cmp(&b.title)),
        CardSort::Price => {
            let price_of = |id: u32| {
                products
                    .iter()
                    .find(|p| p.id == id)
                    .map(|p| p.price)
                    .unwrap_or(0.0)
            };
            cards.sort_by(|a, b| price_of(a.id).total_cmp(&price_of(b.id)));
        }
    }
}
