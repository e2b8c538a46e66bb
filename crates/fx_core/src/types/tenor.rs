//! Tenor labels for forward and money-market curves.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::TenorError;

/// A settlement time bucket such as `ON`, `1W`, `3M` or `EOM`.
///
/// # Examples
///
/// ```
/// use fx_core::types::Tenor;
///
/// let t: Tenor = "3M".parse().unwrap();
/// assert_eq!(t, Tenor::Months(3));
/// assert_eq!(t.approx_days(), Some(90));
/// assert_eq!(t.to_string(), "3M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tenor {
    /// Overnight
    Overnight,
    /// Tomorrow-next
    TomNext,
    /// A number of days
    Days(u32),
    /// A number of weeks
    Weeks(u32),
    /// A number of months
    Months(u32),
    /// A number of years
    Years(u32),
    /// Month-end settlement
    EndOfMonth,
}

impl Tenor {
    /// Approximate calendar days to settlement.
    ///
    /// `EndOfMonth` has no fixed length and returns `None`.
    pub fn approx_days(&self) -> Option<u32> {
        match self {
            Tenor::Overnight => Some(1),
            Tenor::TomNext => Some(2),
            Tenor::Days(n) => Some(*n),
            Tenor::Weeks(n) => Some(7 * n),
            Tenor::Months(n) => Some(30 * n),
            Tenor::Years(n) => Some(365 * n),
            Tenor::EndOfMonth => None,
        }
    }

    /// Approximate year fraction (ACT/365 on `approx_days`).
    pub fn year_fraction(&self) -> Option<f64> {
        self.approx_days().map(|d| d as f64 / 365.0)
    }

    /// Orders two tenors by length; month-end sorts last.
    pub fn cmp_length(&self, other: &Tenor) -> Ordering {
        match (self.approx_days(), other.approx_days()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl FromStr for Tenor {
    type Err = TenorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_uppercase();
        match label.as_str() {
            "ON" => return Ok(Tenor::Overnight),
            "TN" => return Ok(Tenor::TomNext),
            "EOM" => return Ok(Tenor::EndOfMonth),
            _ => {}
        }

        let parse_err = || TenorError::Parse(s.to_string());
        let unit = label.chars().last().ok_or_else(parse_err)?;
        let count: u32 = label[..label.len() - unit.len_utf8()]
            .parse()
            .map_err(|_| parse_err())?;
        if count == 0 {
            return Err(parse_err());
        }

        match unit {
            'D' => Ok(Tenor::Days(count)),
            'W' => Ok(Tenor::Weeks(count)),
            'M' => Ok(Tenor::Months(count)),
            'Y' => Ok(Tenor::Years(count)),
            _ => Err(parse_err()),
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenor::Overnight => write!(f, "ON"),
            Tenor::TomNext => write!(f, "TN"),
            Tenor::Days(n) => write!(f, "{}D", n),
            Tenor::Weeks(n) => write!(f, "{}W", n),
            Tenor::Months(n) => write!(f, "{}M", n),
            Tenor::Years(n) => write!(f, "{}Y", n),
            Tenor::EndOfMonth => write!(f, "EOM"),
        }
    }
}

impl TryFrom<String> for Tenor {
    type Error = TenorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}
