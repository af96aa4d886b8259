//! Utility functions for formatting and display

use chrono::NaiveDate;

/// Placeholder for missing values in tables and detail views.
pub const EMPTY: &str = "-";

/// Format a server date (`2024-03-15` or `2024-03-15T00:00:00Z`) as
/// `15/03/2024`. Unparseable input is returned unchanged.
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY.to_string();
    };
    value
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map_or_else(|| value.to_string(), |date| date.format("%d/%m/%Y").to_string())
}

/// Italian currency format: `1234.5` -> `1.234,50 €`.
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return EMPTY.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let (units, cents) = (cents / 100, cents % 100);

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && (units > 0 || cents > 0) { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, cents)
}

/// Text for optional fields, `-` when absent or blank.
pub fn or_empty(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(EMPTY).to_string()
}
