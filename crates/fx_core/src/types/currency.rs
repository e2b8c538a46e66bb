//! Currency types for FX pairs.
//!
//! This module provides the ISO 4217 codes quoted on the desk together with
//! the flag glyph shown next to each pair.
//!
//! # Examples
//!
//! ```
//! use fx_core::types::Currency;
//!
//! let inr: Currency = "inr".parse().unwrap();
//! assert_eq!(inr, Currency::INR);
//! assert_eq!(inr.code(), "INR");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes traded on the desk.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Indian Rupee
    INR,
    /// Chinese Yuan Renminbi
    CNY,
    /// Swedish Krona
    SEK,
    /// New Zealand Dollar
    NZD,
    /// Australian Dollar
    AUD,
    /// Singapore Dollar
    SGD,
}

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Currency; 11] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CHF,
        Currency::INR,
        Currency::CNY,
        Currency::SEK,
        Currency::NZD,
        Currency::AUD,
        Currency::SGD,
    ];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use fx_core::types::Currency;
    ///
    /// assert_eq!(Currency::SGD.code(), "SGD");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::CNY => "CNY",
            Currency::SEK => "SEK",
            Currency::NZD => "NZD",
            Currency::AUD => "AUD",
            Currency::SGD => "SGD",
        }
    }

    /// Returns the regional-indicator flag glyph for the issuing area.
    pub fn flag(&self) -> &'static str {
        match self {
            Currency::USD => "\u{1F1FA}\u{1F1F8}",
            Currency::EUR => "\u{1F1EA}\u{1F1FA}",
            Currency::GBP => "\u{1F1EC}\u{1F1E7}",
            Currency::JPY => "\u{1F1EF}\u{1F1F5}",
            Currency::CHF => "\u{1F1E8}\u{1F1ED}",
            Currency::INR => "\u{1F1EE}\u{1F1F3}",
            Currency::CNY => "\u{1F1E8}\u{1F1F3}",
            Currency::SEK => "\u{1F1F8}\u{1F1EA}",
            Currency::NZD => "\u{1F1F3}\u{1F1FF}",
            Currency::AUD => "\u{1F1E6}\u{1F1FA}",
            Currency::SGD => "\u{1F1F8}\u{1F1EC}",
        }
    }

    /// Returns true for the G10 currencies quoted on the desk.
    pub fn is_g10(&self) -> bool {
        matches!(
            self,
            Currency::USD
                | Currency::EUR
                | Currency::GBP
                | Currency::JPY
                | Currency::AUD
                | Currency::NZD
                | Currency::CHF
                | Currency::SEK
        )
    }

    /// Returns true for the emerging-market currencies quoted on the desk.
    pub fn is_emerging(&self) -> bool {
        matches!(self, Currency::INR | Currency::CNY | Currency::SGD)
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == upper)
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
