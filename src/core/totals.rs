use crate::domain::model::{LineItem, Order, Product, TopSeller, Totals};
use crate::utils::money::round_cents;
use crate::utils::validation::DATE_FORMAT;
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Product lookup by id. On duplicate ids the first product wins.
pub struct ProductIndex<'a> {
    by_id: HashMap<u32, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for product in products {
            by_id.entry(product.id).or_insert(product);
        }
        Self { by_id }
    }

    pub fn get(&self, id: u32) -> Option<&'a Product> {
        self.by_id.get(&id).copied()
    }
}

/// Every line item across `orders` that resolves to a product, in order.
fn resolved_items<'a>(
    orders: &'a [&'a Order],
    index: &'a ProductIndex<'a>,
) -> impl Iterator<Item = (&'a Product, &'a LineItem)> + 'a {
    orders.iter().flat_map(|order| order.items.iter()).filter_map(move |item| {
        match index.get(item.product_id) {
            Some(product) => Some((product, item)),
            None => {
                tracing::debug!("Skipping line item for unknown product {}", item.product_id);
                None
            }
        }
    })
}

/// Folds all line items into revenue, units and per-category revenue.
///
/// Sums are kept at full precision and rounded once at the end. Stock status is
/// not consulted: a sale of an out-of-stock product still counts.
pub fn compute_totals(orders: &[&Order], index: &ProductIndex, tax_rate: f64) -> Totals {
    let base = Totals::default();

    let mut out = resolved_items(orders, index).fold(base, |mut acc, (product, item)| {
        let line = product.price * f64::from(item.qty);
        acc.revenue += line;
        acc.units += u64::from(item.qty);
        *acc
            .totals_by_category
            .entry(product.category.clone())
            .or_insert(0.0) += line;
        acc
    });

    out.revenue = round_cents(out.revenue);
    for amount in out.totals_by_category.values_mut() {
        *amount = round_cents(*amount);
    }
    out.revenue_with_tax = round_cents(out.revenue * (1.0 + tax_rate));
    out
}

/// The product with the most units sold. Ties go to the product sold first.
pub fn top_seller(orders: &[&Order], index: &ProductIndex) -> Option<TopSeller> {
    let units: IndexMap<u32, (&Product, u64)> =
        resolved_items(orders, index).fold(IndexMap::new(), |mut acc, (product, item)| {
            acc.entry(product.id).or_insert((product, 0)).1 += u64::from(item.qty);
            acc
        });

    units
        .values()
        .fold(None::<(&Product, u64)>, |best, &(product, sold)| match best {
            Some((_, best_units)) if best_units >= sold => best,
            _ => Some((product, sold)),
        })
        .map(|(product, units)| TopSeller {
            product_id: product.id,
            name: product.name.clone(),
            units,
        })
}

/// Orders created strictly after `since`; every order when `since` is `None`.
pub fn orders_since(orders: &[Order], since: Option<NaiveDate>) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| match since {
            None => true,
            Some(since) => NaiveDate::parse_from_str(&order.created_at, DATE_FORMAT)
                .map(|created| created > since)
                .unwrap_or(false),
        })
        .collect()
}
