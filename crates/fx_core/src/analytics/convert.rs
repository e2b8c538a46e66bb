//! Spot conversion between the two legs of a pair.

use serde::{Deserialize, Serialize};

use crate::types::{Currency, CurrencyPair};

/// Converts `amount` at `spot` (quote units per base unit).
///
/// Base to quote multiplies by spot; `reversed` converts quote to base and
/// divides. Returns `None` for a non-finite amount or a spot that is not
/// positive and finite.
///
/// ```
/// use fx_core::analytics::convert;
///
/// assert_eq!(convert(2.0, 90.5, false), Some(181.0));
/// assert_eq!(convert(181.0, 90.5, true), Some(2.0));
/// assert_eq!(convert(1.0, 0.0, false), None);
/// ```
pub fn convert(amount: f64, spot: f64, reversed: bool) -> Option<f64> {
    if !amount.is_finite() || !spot.is_finite() || spot <= 0.0 {
        return None;
    }
    Some(if reversed { amount / spot } else { amount * spot })
}

/// A converted amount with the currencies on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Currency the amount is given in
    pub from: Currency,
    /// Currency the amount is converted into
    pub to: Currency,
    /// Input amount
    pub amount: f64,
    /// Converted amount
    pub converted: f64,
    /// Spot used, quote units per base unit
    pub spot: f64,
}

impl Conversion {
    /// Converts `amount` of `pair`'s base into its quote, or quote into base
    /// when `reversed`.
    pub fn for_pair(pair: &CurrencyPair, amount: f64, spot: f64, reversed: bool) -> Option<Self> {
        let (from, to) = if reversed {
            (pair.quote(), pair.base())
        } else {
            (pair.base(), pair.quote())
        };
        Some(Self {
            from,
            to,
            amount,
            converted: convert(amount, spot, reversed)?,
            spot,
        })
    }

    /// The same conversion read the other way round.
    pub fn swapped(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            amount: self.converted,
            converted: self.amount,
            spot: self.spot,
        }
    }
}
