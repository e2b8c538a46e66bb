//! Core FX value types.
//!
//! This module provides:
//! - `currency`: ISO 4217 codes quoted on the desk
//! - `pair`: Pair ids, market classification and the static pair catalog
//! - `rate`: Per-pair rate state and point-in-time snapshots
//! - `tenor`: Settlement tenor labels
//! - `error`: Structured error types
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod pair;
pub mod rate;
pub mod tenor;

pub use currency::Currency;
pub use error::{CurrencyError, InterpolationError, TenorError};
pub use pair::{CurrencyPair, Market, PairCatalog, PairFilter, PairGroup, PairId};
pub use rate::{Direction, RateSnapshot, RateState};
pub use tenor::Tenor;
