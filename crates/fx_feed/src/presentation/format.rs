//! Display formatting for rate table cells.

use chrono::{DateTime, Utc};
use fx_core::types::CurrencyPair;

// -0.0 would otherwise print as "-0.0000"
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

fn sign(value: f64) -> &'static str {
    if value >= 0.0 {
        "+"
    } else {
        ""
    }
}

/// Format a price for `pair`.
///
/// Yen pairs show 3 decimals above 1 and 4 otherwise; other pairs show 4
/// decimals at or above 10 and 5 below.
///
/// ```
/// use fx_core::types::PairCatalog;
/// use fx_feed::presentation::format_rate;
///
/// let catalog = PairCatalog::standard();
/// assert_eq!(format_rate(154.2731, catalog.get("USDJPY-OFF").unwrap()), "154.273");
/// assert_eq!(format_rate(0.58694, catalog.get("JPYINR-OFF").unwrap()), "0.5869");
/// assert_eq!(format_rate(90.57, catalog.get("USDINR-OFF").unwrap()), "90.5700");
/// assert_eq!(format_rate(1.19004, catalog.get("EURUSD-OFF").unwrap()), "1.19004");
/// ```
pub fn format_rate(value: f64, pair: &CurrencyPair) -> String {
    let decimals = if pair.has_jpy_leg() {
        if value > 1.0 {
            3
        } else {
            4
        }
    } else if value >= 10.0 {
        4
    } else {
        5
    };
    format!("{:.*}", decimals, unsigned_zero(value))
}

/// Format a spread to 5 decimals.
pub fn format_spread(value: f64) -> String {
    format!("{:.5}", unsigned_zero(value))
}

/// Signed absolute change, e.g. `+0.1234`.
pub fn format_change(value: f64) -> String {
    let v = unsigned_zero(value);
    format!("{}{:.4}", sign(v), v)
}

/// Signed percentage change in parentheses, e.g. `(+0.1234%)`.
pub fn format_change_pct(value: f64) -> String {
    let v = unsigned_zero(value);
    format!("({}{:.4}%)", sign(v), v)
}

/// Signed percentage with two decimals, e.g. `-1.25%`.
pub fn format_percent(value: f64) -> String {
    let v = unsigned_zero(value);
    format!("{}{:.2}%", sign(v), v)
}

/// Amount with thousands separators and two decimals, e.g. `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", unsigned_zero(value).abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let minus = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", minus, grouped, frac_part)
}

/// Age of `then` relative to `now`: `just now`, `<n>s ago` or `<n>m ago`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 5 {
        "just now".to_string()
    } else if seconds < 60 {
        format!("{}s ago", seconds)
    } else {
        format!("{}m ago", seconds / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use fx_core::types::PairCatalog;

    fn pair(id: &str) -> &'static CurrencyPair {
        PairCatalog::standard().get(id).unwrap()
    }

    #[test]
    fn test_format_rate_bands() {
        assert_eq!(format_rate(0.5, pair("JPYINR-ON")), "0.5000");
        assert_eq!(format_rate(1.5, pair("USDJPY-ON")), "1.500");
        assert_eq!(format_rate(10.0, pair("CNYINR-OFF")), "10.0000");
        assert_eq!(format_rate(9.99999, pair("USDCNY-OFF")), "9.99999");
        assert_eq!(format_rate(0.60492, pair("NZDUSD-OFF")), "0.60492");
    }

    #[test]
    fn test_signed_formats() {
        assert_eq!(format_change(0.12345), "+0.1235");
        assert_eq!(format_change(-0.5), "-0.5000");
        assert_eq!(format_change(-0.0), "+0.0000");
        assert_eq!(format_change_pct(0.2), "(+0.2000%)");
        assert_eq!(format_change_pct(-1.0), "(-1.0000%)");
        assert_eq!(format_percent(1.5), "+1.50%");
        assert_eq!(format_spread(0.00003), "0.00003");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1_000.0), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-12_500.0), "-12,500.00");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::seconds(4), now), "just now");
        assert_eq!(relative_time(now - Duration::seconds(5), now), "5s ago");
        assert_eq!(relative_time(now - Duration::seconds(59), now), "59s ago");
        assert_eq!(relative_time(now - Duration::seconds(125), now), "2m ago");
        assert_eq!(relative_time(now + Duration::seconds(10), now), "just now");
    }
}
