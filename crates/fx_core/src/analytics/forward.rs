//! Forward-rate interpolation for arbitrary settlement dates.
//!
//! A forward curve is a list of [`ForwardRate`] rows, one per tenor pillar or
//! month-end date. [`interpolate_forward`] prices a target date by linear
//! interpolation on settlement date between the two bracketing rows and
//! clamps to the first or last row outside the curve.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::math::lerp;
use crate::types::Tenor;

/// One point on a forward curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardRate {
    /// Tenor label of the row (`1M`, `EOM`, ...).
    pub tenor: Tenor,
    /// Settlement date of the forward.
    pub settlement_date: NaiveDate,
    /// Outright forward rate.
    pub forward_rate: f64,
    /// Forward points over spot.
    pub forward_points: f64,
    /// Annualised forward premium in percent.
    pub annualized_premium_pct: f64,
    /// Hedging cost in percent of notional.
    pub hedging_cost_pct: f64,
    /// Whether the row settles on a month end.
    #[serde(default)]
    pub is_month_end: bool,
}

/// Result of pricing a forward for a target date and notional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardQuote {
    /// Settlement date of the quote. Equal to the clamped row's date
    /// outside the curve, otherwise the requested target.
    pub settlement_date: NaiveDate,
    /// Interpolated outright forward rate.
    pub forward_rate: f64,
    /// Interpolated forward points.
    pub forward_points: f64,
    /// Interpolated annualised premium in percent.
    pub annualized_premium_pct: f64,
    /// Interpolated hedging cost in percent.
    pub hedging_cost_pct: f64,
    /// Absolute hedging cost, `amount * hedging_cost_pct / 100`.
    pub hedging_cost: f64,
}

impl ForwardQuote {
    fn from_row(row: &ForwardRate, amount: f64) -> Self {
        Self {
            settlement_date: row.settlement_date,
            forward_rate: row.forward_rate,
            forward_points: row.forward_points,
            annualized_premium_pct: row.annualized_premium_pct,
            hedging_cost_pct: row.hedging_cost_pct,
            hedging_cost: amount * row.hedging_cost_pct / 100.0,
        }
    }
}

/// Prices a forward for `target` from `curve` and notional `amount`.
///
/// The curve need not be sorted; a sorted copy is used. Rows sharing a
/// settlement date keep their input order, and a target landing exactly on
/// such a date takes the earliest of them.
///
/// Returns `None` for an empty curve.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use fx_core::analytics::forward::{interpolate_forward, ForwardRate};
/// use fx_core::types::Tenor;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
/// let row = |tenor, date, rate| ForwardRate {
///     tenor,
///     settlement_date: date,
///     forward_rate: rate,
///     forward_points: 0.0,
///     annualized_premium_pct: 0.0,
///     hedging_cost_pct: 0.2,
///     is_month_end: false,
/// };
/// let curve = vec![
///     row(Tenor::Months(1), d(7, 1), 90.60),
///     row(Tenor::Months(2), d(7, 31), 90.70),
/// ];
///
/// let quote = interpolate_forward(d(7, 16), &curve, 1_000_000.0).unwrap();
/// assert!((quote.forward_rate - 90.65).abs() < 1e-9);
/// assert!((quote.hedging_cost - 2_000.0).abs() < 1e-6);
/// ```
pub fn interpolate_forward(
    target: NaiveDate,
    curve: &[ForwardRate],
    amount: f64,
) -> Option<ForwardQuote> {
    let mut sorted: Vec<&ForwardRate> = curve.iter().collect();
    sorted.sort_by_key(|row| row.settlement_date);

    let first = *sorted.first()?;
    let last = *sorted.last()?;

    if target <= first.settlement_date {
        return Some(ForwardQuote::from_row(first, amount));
    }
    if target >= last.settlement_date {
        return Some(ForwardQuote::from_row(last, amount));
    }

    // first.settlement_date < target < last.settlement_date, so 0 < pos < len
    let pos = sorted.partition_point(|row| row.settlement_date < target);
    let b = sorted[pos];
    if b.settlement_date == target {
        return Some(ForwardQuote::from_row(b, amount));
    }
    let a = sorted[pos - 1];

    let span = (b.settlement_date - a.settlement_date).num_days() as f64;
    let t = (target - a.settlement_date).num_days() as f64 / span;

    let hedging_cost_pct = lerp(a.hedging_cost_pct, b.hedging_cost_pct, t);
    Some(ForwardQuote {
        settlement_date: target,
        forward_rate: lerp(a.forward_rate, b.forward_rate, t),
        forward_points: lerp(a.forward_points, b.forward_points, t),
        annualized_premium_pct: lerp(a.annualized_premium_pct, b.annualized_premium_pct, t),
        hedging_cost_pct,
        hedging_cost: amount * hedging_cost_pct / 100.0,
    })
}
