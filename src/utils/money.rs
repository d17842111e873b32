use rust_decimal::{Decimal, RoundingStrategy};

/// Exact decimal value of `amount` rounded to cents, ties away from zero.
/// `None` for NaN, infinities and magnitudes beyond `Decimal`'s range.
fn to_cents(amount: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Rounds to whole cents from the exact binary value, so `0.015` (stored just
/// below the tie) becomes `0.01` while the exact tie `0.125` becomes `0.13`.
pub fn round_cents(amount: f64) -> f64 {
    to_cents(amount)
        .and_then(|cents| cents.to_string().parse().ok())
        .unwrap_or(amount)
}

/// `<currency><amount to 2 decimals>`, e.g. `€1499.99`.
pub fn format_money(currency: &str, amount: f64) -> String {
    match to_cents(amount) {
        Some(cents) => format!("{}{:.2}", currency, cents),
        None => format!("{}{:.2}", currency, amount),
    }
}
