//! Error types of the foundation layer.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency and pair construction
//! - `TenorError`: Errors from tenor label parsing
//! - `InterpolationError`: Errors from building or querying a curve interpolator
//!
//! Lookups that simply find nothing (an unknown pair id, an empty forward
//! curve) are not errors; they return `Option::None`.

use thiserror::Error;

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Currency code not in the supported set
/// - `SameCurrency`: Base and quote currencies are the same
///
/// # Examples
/// ```
/// use fx_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency code: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Currency code not recognised.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Base and quote legs are identical.
    #[error("Base and quote currency are both {0}")]
    SameCurrency(String),
}

/// Tenor label parsing errors.
///
/// # Examples
/// ```
/// use fx_core::types::TenorError;
///
/// let err = TenorError::Parse("7Q".to_string());
/// assert!(format!("{}", err).contains("7Q"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// Label does not match any supported tenor form.
    #[error("Cannot parse tenor label '{0}'")]
    Parse(String),
}

/// Failures building or querying a [`LinearInterpolator`](crate::math::interpolators::LinearInterpolator).
///
/// ```
/// use fx_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfRange { at: 5.0, first: 0.0, last: 3.0 };
/// assert_eq!(err.to_string(), "5 lies outside the knots [0, 3]");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than two knots.
    #[error("At least two knots are needed, got {0}")]
    TooFewKnots(usize),

    /// Knot and value slices differ in length.
    #[error("{knots} knots but {values} values")]
    LengthMismatch {
        /// Number of knots supplied
        knots: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Two knots share an abscissa, or a knot is not finite.
    #[error("Knot {0} is repeated or not finite")]
    BadKnot(f64),

    /// Strict query outside the first and last knot.
    #[error("{at} lies outside the knots [{first}, {last}]")]
    OutOfRange {
        /// Query point
        at: f64,
        /// First knot
        first: f64,
        /// Last knot
        last: f64,
    },
}
