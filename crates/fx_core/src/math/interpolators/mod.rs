//! Interpolation over curve pillars.
//!
//! [`LinearInterpolator`] backs [`InterestRateCurve::rate_at`](crate::analytics::InterestRateCurve::rate_at).
//! The [`Interpolator`] trait separates strict queries, which fail outside
//! the knots, from the flat-extrapolating `interpolate_clamped`.
//!
//! ```
//! use fx_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let curve = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[4.0, 5.0, 7.0]).unwrap();
//! assert_eq!(curve.interpolate(1.5).unwrap(), 6.0);
//! assert!(curve.interpolate(2.5).is_err());
//! ```

mod linear;

pub use linear::LinearInterpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolation over a finite domain.
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::OutOfRange` if `x` is outside [`Interpolator::domain`].
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// The `(min, max)` range of valid query points.
    fn domain(&self) -> (T, T);
}
