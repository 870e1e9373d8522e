//! Display formatting for dates & figures.

use chrono::{DateTime, NaiveDate, Utc};

/// e.g. `March 7, 2020`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// e.g. `March 7, 2020 04:50 UTC`
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%B %-d, %Y %H:%M UTC").to_string()
}

/// Groups digits by thousands, e.g. `50,000,000`
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Meters with one decimal, `N/A` when the API omits the value
pub fn format_meters(meters: Option<f64>) -> String {
    meters
        .map(|m| format!("{:.1} m", m))
        .unwrap_or_else(|| "N/A".to_string())
}

/// `value` followed by `unit`, `N/A` when the API omits the value
pub fn format_optional<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
    value
        .map(|value| format!("{} {}", value, unit).trim_end().to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
