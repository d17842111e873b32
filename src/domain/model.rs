use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: u32,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<LineItem>,
    /// ISO date, `YYYY-MM-DD`.
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Display-ready view of a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub price_label: String,
    pub badge: String,
    pub is_highlighted: bool,
    pub category: String,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub revenue: f64,
    pub units: u64,
    /// Keyed in order of first sale.
    pub totals_by_category: IndexMap<String, f64>,
    pub revenue_with_tax: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSeller {
    pub product_id: u32,
    pub name: String,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub cards: Vec<Card>,
    pub visible_cards: Vec<Card>,
    pub totals: Totals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_seller: Option<TopSeller>,
}
