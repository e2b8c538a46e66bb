//! Synthetic forward curves.
//!
//! Pillar rows settle a fixed number of business days after today; month-end
//! rows settle on the last calendar day of each of the next twelve months.
//! Each row's premium scales the annual differential by the year fraction to
//! settlement, with a little multiplicative noise.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use fx_core::analytics::ForwardRate;
use fx_core::math::round_dp;
use fx_core::types::Tenor;
use rand::Rng;

/// Annual interest differential, in percent, when none is supplied.
pub const DEFAULT_DIFFERENTIAL_PCT: f64 = 1.5;

/// Pillar tenors and their business-day offsets.
pub const PILLAR_TENORS: [(Tenor, u64); 10] = [
    (Tenor::Overnight, 1),
    (Tenor::TomNext, 2),
    (Tenor::Weeks(1), 7),
    (Tenor::Weeks(2), 14),
    (Tenor::Months(1), 30),
    (Tenor::Months(2), 60),
    (Tenor::Months(3), 90),
    (Tenor::Months(6), 180),
    (Tenor::Months(9), 270),
    (Tenor::Years(1), 365),
];

const PILLAR_NOISE: f64 = 0.2;
const MONTH_END_NOISE: f64 = 0.15;
const MONTH_END_ROWS: u32 = 12;

/// `date` moved forward by `days` weekdays.
///
/// ```
/// use chrono::NaiveDate;
/// use fx_feed::mock::forwards::add_business_days;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// assert_eq!(add_business_days(friday, 1), NaiveDate::from_ymd_opt(2025, 7, 21).unwrap());
/// ```
pub fn add_business_days(date: NaiveDate, days: u64) -> NaiveDate {
    let mut result = date;
    let mut added = 0;
    while added < days {
        match result.checked_add_days(Days::new(1)) {
            Some(next) => result = next,
            None => break,
        }
        if !matches!(result.weekday(), Weekday::Sat | Weekday::Sun) {
            added += 1;
        }
    }
    result
}

/// Last calendar day of `month` in `year`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

fn month_start_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let index = date.year() * 12 + date.month0() as i32 + months as i32;
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

fn forward_row<R: Rng + ?Sized>(
    tenor: Tenor,
    settlement_date: NaiveDate,
    days: i64,
    spot: f64,
    differential: f64,
    noise: f64,
    rng: &mut R,
) -> ForwardRate {
    let annual_factor = days as f64 / 365.0;
    let premium = differential * annual_factor * (1.0 + (rng.gen::<f64>() - 0.5) * noise);
    let points = spot * premium / 100.0;
    let hedging = premium * (0.12 + rng.gen::<f64>() * 0.04);

    ForwardRate {
        tenor,
        settlement_date,
        forward_rate: round_dp(spot + points, 4),
        forward_points: round_dp(points, 4),
        annualized_premium_pct: round_dp(premium, 2),
        hedging_cost_pct: round_dp(hedging, 2),
        is_month_end: tenor == Tenor::EndOfMonth,
    }
}

/// Forward curve for `spot` as seen on `today`.
///
/// Pillar rows come first in tenor order, then month-end rows in date
/// order. Month ends on or before `today` are skipped.
pub fn forward_curve<R: Rng + ?Sized>(
    spot: f64,
    differential: f64,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<ForwardRate> {
    let mut rows = Vec::with_capacity(PILLAR_TENORS.len() + MONTH_END_ROWS as usize);

    for (tenor, days) in PILLAR_TENORS {
        let settlement = add_business_days(today, days);
        rows.push(forward_row(
            tenor,
            settlement,
            days as i64,
            spot,
            differential,
            PILLAR_NOISE,
            rng,
        ));
    }

    for m in 0..MONTH_END_ROWS {
        let Some(eom) = month_start_after(today, m)
            .and_then(|first| last_day_of_month(first.year(), first.month()))
        else {
            continue;
        };
        if eom <= today {
            continue;
        }
        let days = (eom - today).num_days();
        rows.push(forward_row(
            Tenor::EndOfMonth,
            eom,
            days,
            spot,
            differential,
            MONTH_END_NOISE,
            rng,
        ));
    }

    rows
}
