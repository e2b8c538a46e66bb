//! Derived analytics over rates, forward curves and history.
//!
//! All functions here are pure: no state, no I/O, no randomness.
//!
//! - [`convert`](mod@convert): spot conversion between base and quote
//! - [`forward`]: forward-rate interpolation and hedging cost
//! - [`technical`]: moving averages, oscillators, pivots and a summary verdict
//! - [`yield_curve`]: curve shape and domestic/foreign rate differentials

pub mod convert;
pub mod forward;
pub mod technical;
pub mod yield_curve;

pub use convert::{convert, Conversion};
pub use forward::{interpolate_forward, ForwardQuote, ForwardRate};
pub use technical::{
    Candle, MovingAverage, PivotPoints, Signal, SignalTally, TechnicalReport, TechnicalSignal,
    TechnicalSummary,
};
pub use yield_curve::{CurvePoint, CurveShape, InterestRateCurve, TenorSpread, YieldDifferential};
