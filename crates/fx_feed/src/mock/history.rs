//! Deterministic daily candle history.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fx_core::analytics::Candle;
use fx_core::math::round_dp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulator::seed_rate;

/// Daily volatility as a fraction of the base rate.
const DAILY_VOLATILITY: f64 = 0.004;

/// Stable seed for a pair id (31-multiplier string hash, 32-bit wrap).
///
/// ```
/// use fx_feed::mock::history::pair_seed;
///
/// assert_eq!(pair_seed(""), 0);
/// assert_eq!(pair_seed("a"), 97);
/// assert_eq!(pair_seed("EURUSD-OFF"), pair_seed("EURUSD-OFF"));
/// ```
pub fn pair_seed(pair_id: &str) -> u64 {
    let hash = pair_id
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    u64::from(hash.unsigned_abs())
}

fn candle_decimals(rate: f64) -> u32 {
    if rate > 10.0 {
        4
    } else {
        5
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekday candles for the `days` calendar days before `today`.
///
/// The same pair id always yields the same series. Pairs without a seed
/// quote walk around 1.0.
pub fn historical_candles(pair_id: &str, days: u32, today: NaiveDate) -> Vec<Candle> {
    let base = seed_rate(pair_id).map_or(1.0, |s| s.bid);
    let decimals = candle_decimals(base);
    let mut rng = StdRng::seed_from_u64(pair_seed(pair_id));

    let Some(start) = today.checked_sub_days(Days::new(u64::from(days))) else {
        return Vec::new();
    };

    let volatility = base * DAILY_VOLATILITY;
    let mut price = base * (0.95 + rng.gen::<f64>() * 0.1);
    let mut candles = Vec::with_capacity(days as usize);

    for date in start.iter_days().take(days as usize) {
        if is_weekend(date) {
            continue;
        }

        let open = price;
        let drift = (rng.gen::<f64>() - 0.48) * volatility * 0.3;
        let close = round_dp(open + drift + (rng.gen::<f64>() - 0.5) * volatility, decimals);
        let high = round_dp(open.max(close) + rng.gen::<f64>() * volatility * 0.5, decimals);
        let low = round_dp(open.min(close) - rng.gen::<f64>() * volatility * 0.5, decimals);

        candles.push(Candle {
            date,
            open: round_dp(open, decimals),
            high,
            low,
            close,
        });
        price = close;
    }

    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 16).unwrap()
    }

    #[test]
    fn test_same_pair_same_series() {
        let a = historical_candles("USDINR-OFF", 120, today());
        let b = historical_candles("USDINR-OFF", 120, today());
        assert_eq!(a, b);
        assert_ne!(a, historical_candles("EURUSD-OFF", 120, today()));
    }

    #[test]
    fn test_weekdays_only_and_before_today() {
        let candles = historical_candles("EURUSD-OFF", 28, today());
        assert_eq!(candles.len(), 20);
        assert!(candles.iter().all(|c| !is_weekend(c.date) && c.date < today()));
        assert!(candles.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_candles_are_consistent() {
        for c in historical_candles("USDJPY-OFF", 365, today()) {
            assert!(c.low <= c.open.min(c.close) + 1e-9, "{:?}", c);
            assert!(c.high >= c.open.max(c.close) - 1e-9, "{:?}", c);
        }
    }

    #[test]
    fn test_series_is_continuous() {
        let candles = historical_candles("GBPINR-OFF", 60, today());
        for w in candles.windows(2) {
            assert_eq!(w[1].open, w[0].close);
        }
    }

    #[test]
    fn test_unknown_pair_walks_around_one() {
        let candles = historical_candles("NOT-A-PAIR", 30, today());
        assert!(!candles.is_empty());
        assert!((0.9..1.1).contains(&candles[0].open));
    }

    #[test]
    fn test_zero_days_is_empty() {
        assert!(historical_candles("USDINR-OFF", 0, today()).is_empty());
    }
}
