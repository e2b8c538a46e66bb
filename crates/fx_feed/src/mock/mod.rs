//! Mock market-data generators.
//!
//! Stand-ins for the historical, forward and money-market services a
//! trading desk would call, producing inputs for the analytics in
//! `fx_core::analytics`.
//!
//! - [`history`]: daily candles, deterministic per pair
//! - [`forwards`]: pillar and month-end forward rows
//! - [`curves`]: central-bank style money-market curves

pub mod curves;
pub mod forwards;
pub mod history;

pub use curves::{curve_profile, interest_rate_curve, pair_differential, CurveProfile};
pub use forwards::{forward_curve, DEFAULT_DIFFERENTIAL_PCT};
pub use history::historical_candles;
