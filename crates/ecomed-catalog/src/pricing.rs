//! Price helpers shared by items and the cart summary.

/// Round to 2 decimal places for currency display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price after applying a percentage discount. Not rounded.
pub fn discounted(price: f64, discount: f64) -> f64 {
    price * (1.0 - discount / 100.0)
}

/// Render an amount as `{symbol}{value:.2}`, e.g. `₹90.00`.
pub fn format_amount(symbol: &str, value: f64) -> String {
    format!("{}{:.2}", symbol, value)
}

/// Render a stored amount as-is, e.g. `₹20` or `₹12.5`.
pub fn format_raw(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, value)
}
