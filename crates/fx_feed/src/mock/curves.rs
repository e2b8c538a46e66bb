//! Synthetic money-market curves.

use chrono::{DateTime, Duration, Utc};
use fx_core::analytics::{CurvePoint, InterestRateCurve, YieldDifferential};
use fx_core::math::round_dp;
use fx_core::types::{Currency, CurrencyPair, Tenor};
use rand::Rng;
use rand_distr::StandardNormal;

/// Policy-rate anchor of a currency's curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveProfile {
    /// Overnight level in percent
    pub base: f64,
    /// Rise per unit of `10 * year_fraction`, in percent
    pub slope: f64,
    /// Publishing source
    pub source: &'static str,
}

const fn profile(base: f64, slope: f64, source: &'static str) -> CurveProfile {
    CurveProfile {
        base,
        slope,
        source,
    }
}

/// Profile of `currency`; unlisted currencies get a generic market curve.
pub fn curve_profile(currency: Currency) -> CurveProfile {
    match currency {
        Currency::USD => profile(5.33, 0.03, "FRED"),
        Currency::EUR => profile(3.75, 0.04, "ECB"),
        Currency::GBP => profile(5.15, 0.02, "BoE"),
        Currency::JPY => profile(0.10, 0.08, "BoJ"),
        Currency::INR => profile(6.50, 0.09, "RBI"),
        Currency::CNY => profile(2.20, 0.06, "PBoC"),
        Currency::AUD => profile(4.35, 0.03, "RBA"),
        Currency::NZD => profile(5.50, 0.02, "RBNZ"),
        Currency::CHF => profile(1.75, 0.04, "SNB"),
        Currency::SEK => profile(3.50, 0.03, "Riksbank"),
        Currency::SGD => profile(3.40, 0.03, "MAS"),
        _ => profile(3.0, 0.03, "Market"),
    }
}

/// Curve tenors with the year fraction fed to the slope.
pub const CURVE_TENORS: [(Tenor, f64); 6] = [
    (Tenor::Overnight, 1.0 / 365.0),
    (Tenor::Weeks(1), 7.0 / 365.0),
    (Tenor::Months(1), 1.0 / 12.0),
    (Tenor::Months(3), 3.0 / 12.0),
    (Tenor::Months(6), 6.0 / 12.0),
    (Tenor::Years(1), 1.0),
];

/// Standard deviation of per-tenor noise, in percent.
const NOISE_STD: f64 = 0.015;

/// Curve for `currency`, stamped one to four hours before `now`.
pub fn interest_rate_curve<R: Rng + ?Sized>(
    currency: Currency,
    now: DateTime<Utc>,
    rng: &mut R,
) -> InterestRateCurve {
    let p = curve_profile(currency);
    let points = CURVE_TENORS
        .iter()
        .map(|&(tenor, factor)| {
            let z: f64 = rng.sample(StandardNormal);
            CurvePoint {
                tenor,
                rate: round_dp(p.base + p.slope * factor * 10.0 + z * NOISE_STD, 2),
            }
        })
        .collect();

    let as_of = now - Duration::hours(rng.gen_range(1..=4));
    InterestRateCurve::new(currency, p.source, as_of, points)
}

/// Differential between the base-currency (domestic) and quote-currency
/// (foreign) curves of `pair`.
pub fn pair_differential<R: Rng + ?Sized>(
    pair: &CurrencyPair,
    now: DateTime<Utc>,
    rng: &mut R,
) -> YieldDifferential {
    let domestic = interest_rate_curve(pair.base(), now, rng);
    let foreign = interest_rate_curve(pair.quote(), now, rng);
    YieldDifferential::new(&domestic, &foreign)
}
