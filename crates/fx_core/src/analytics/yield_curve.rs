//! Money-market yield curves and the differential between two of them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::interpolators::LinearInterpolator;
use crate::types::{Currency, Tenor};

/// Long-minus-short difference, in percentage points, inside which a curve
/// is classed as flat.
pub const SHAPE_THRESHOLD_PP: f64 = 0.12;

/// Slope classification of a yield curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveShape {
    /// Longest tenor yields more than the shortest.
    Normal,
    /// Longest tenor yields less than the shortest.
    Inverted,
    /// Ends within [`SHAPE_THRESHOLD_PP`] of each other.
    Flat,
}

impl CurveShape {
    /// Classifies from the shortest and longest tenor rates.
    pub fn classify(short_rate: f64, long_rate: f64) -> Self {
        let slope = long_rate - short_rate;
        if slope > SHAPE_THRESHOLD_PP {
            CurveShape::Normal
        } else if slope < -SHAPE_THRESHOLD_PP {
            CurveShape::Inverted
        } else {
            CurveShape::Flat
        }
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CurveShape::Normal => "normal",
            CurveShape::Inverted => "inverted",
            CurveShape::Flat => "flat",
        };
        write!(f, "{}", s)
    }
}

/// One tenor and its annualised rate in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor label
    pub tenor: Tenor,
    /// Rate in percent
    pub rate: f64,
}

/// A currency's money-market curve as published by a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRateCurve {
    currency: Currency,
    source: String,
    as_of: DateTime<Utc>,
    points: Vec<CurvePoint>,
}

impl InterestRateCurve {
    /// Builds a curve; points are ordered by tenor length.
    pub fn new(
        currency: Currency,
        source: impl Into<String>,
        as_of: DateTime<Utc>,
        mut points: Vec<CurvePoint>,
    ) -> Self {
        points.sort_by(|a, b| a.tenor.cmp_length(&b.tenor));
        Self {
            currency,
            source: source.into(),
            as_of,
            points,
        }
    }

    /// Curve currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Publishing source, e.g. `RBI`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Publication timestamp.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    /// Points, shortest tenor first.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Rate quoted for exactly `tenor`.
    pub fn rate_for(&self, tenor: Tenor) -> Option<f64> {
        self.points.iter().find(|p| p.tenor == tenor).map(|p| p.rate)
    }

    /// Slope class from the shortest to the longest tenor.
    ///
    /// `None` with fewer than two points.
    pub fn shape(&self) -> Option<CurveShape> {
        if self.points.len() < 2 {
            return None;
        }
        let short = self.points.first()?.rate;
        let long = self.points.last()?.rate;
        Some(CurveShape::classify(short, long))
    }

    /// Rate at a year fraction by linear interpolation on tenor length,
    /// flat beyond the ends. Month-end points carry no fixed length and are
    /// skipped.
    pub fn rate_at(&self, year_fraction: f64) -> Option<f64> {
        let mut xs: Vec<f64> = Vec::with_capacity(self.points.len());
        let mut ys: Vec<f64> = Vec::with_capacity(self.points.len());
        for point in &self.points {
            let Some(x) = point.tenor.year_fraction() else {
                continue;
            };
            if xs.last() == Some(&x) {
                continue;
            }
            xs.push(x);
            ys.push(point.rate);
        }

        match xs.len() {
            0 => None,
            1 => Some(ys[0]),
            _ => LinearInterpolator::new(&xs, &ys)
                .ok()
                .map(|interp| interp.interpolate_clamped(year_fraction)),
        }
    }
}

/// Domestic and foreign rates at one shared tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorSpread {
    /// Shared tenor
    pub tenor: Tenor,
    /// Domestic rate
    pub domestic: f64,
    /// Foreign rate
    pub foreign: f64,
    /// `domestic - foreign`
    pub spread: f64,
}

/// Rate differential between a domestic and a foreign curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldDifferential {
    /// Domestic currency
    pub domestic: Currency,
    /// Foreign currency
    pub foreign: Currency,
    /// Spreads for tenors quoted on both curves, in domestic order.
    pub spreads: Vec<TenorSpread>,
    /// Shape of the domestic curve.
    pub domestic_shape: Option<CurveShape>,
    /// Shape of the foreign curve.
    pub foreign_shape: Option<CurveShape>,
}

impl YieldDifferential {
    /// Differential of `domestic` over `foreign`.
    pub fn new(domestic: &InterestRateCurve, foreign: &InterestRateCurve) -> Self {
        let spreads = domestic
            .points()
            .iter()
            .filter_map(|d| {
                let f = foreign.rate_for(d.tenor)?;
                Some(TenorSpread {
                    tenor: d.tenor,
                    domestic: d.rate,
                    foreign: f,
                    spread: d.rate - f,
                })
            })
            .collect();

        Self {
            domestic: domestic.currency(),
            foreign: foreign.currency(),
            spreads,
            domestic_shape: domestic.shape(),
            foreign_shape: foreign.shape(),
        }
    }

    /// Spread at `tenor`, if both curves quote it.
    pub fn spread_for(&self, tenor: Tenor) -> Option<f64> {
        self.spreads
            .iter()
            .find(|s| s.tenor == tenor)
            .map(|s| s.spread)
    }

    /// The 1Y spread shown as the headline differential.
    pub fn headline(&self) -> Option<f64> {
        self.spread_for(Tenor::Years(1))
    }
}
