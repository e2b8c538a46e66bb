//! Piecewise linear interpolation over sorted knots.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Straight-line segments between `(knot, value)` pairs.
///
/// Knots may be given in any order; they are sorted once on construction.
/// Curve queries in this crate use [`LinearInterpolator::interpolate_clamped`],
/// which holds the end values flat beyond the outermost knots.
///
/// ```
/// use fx_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// // ON, 6M and 1Y pillars given out of order
/// let curve = LinearInterpolator::<f64>::new(&[1.0, 0.0, 0.5], &[6.8, 6.5, 6.6]).unwrap();
/// assert_eq!(curve.domain(), (0.0, 1.0));
/// assert!((curve.interpolate(0.75).unwrap() - 6.7).abs() < 1e-12);
/// assert_eq!(curve.interpolate_clamped(2.0), 6.8);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    knots: Vec<(T, T)>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Builds an interpolator from knots `xs` and their values `ys`.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` when the slices differ in length, `TooFewKnots` below
    /// two knots, and `BadKnot` for a repeated or non-finite knot.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                knots: xs.len(),
                values: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpolationError::TooFewKnots(xs.len()));
        }
        if let Some(x) = xs.iter().find(|x| !x.is_finite()) {
            return Err(InterpolationError::BadKnot(as_f64(*x)));
        }

        let mut knots: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        knots.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        if let Some(w) = knots.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(InterpolationError::BadKnot(as_f64(w[0].0)));
        }

        Ok(Self { knots })
    }

    /// Sorted `(knot, value)` pairs.
    pub fn knots(&self) -> &[(T, T)] {
        &self.knots
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Value at `x`, holding the first and last values flat outside the knots.
    pub fn interpolate_clamped(&self, x: T) -> T {
        let (first, last) = (self.knots[0], self.knots[self.knots.len() - 1]);
        if x <= first.0 {
            first.1
        } else if x >= last.0 {
            last.1
        } else {
            self.value_inside(x)
        }
    }

    /// Linear value on the segment containing `x`, which must lie strictly
    /// inside or on the knots.
    fn value_inside(&self, x: T) -> T {
        // first knot strictly greater than x, kept within 1..len
        let upper = self
            .knots
            .partition_point(|&(k, _)| k <= x)
            .clamp(1, self.knots.len() - 1);
        let (x0, y0) = self.knots[upper - 1];
        let (x1, y1) = self.knots[upper];
        y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (first, last) = self.domain();
        if !(first..=last).contains(&x) {
            return Err(InterpolationError::OutOfRange {
                at: as_f64(x),
                first: as_f64(first),
                last: as_f64(last),
            });
        }
        Ok(self.value_inside(x))
    }

    fn domain(&self) -> (T, T) {
        (self.knots[0].0, self.knots[self.knots.len() - 1].0)
    }
}

fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pillars() -> LinearInterpolator<f64> {
        // ON, 3M, 1Y
        LinearInterpolator::new(&[0.0, 0.25, 1.0], &[5.3, 5.4, 5.1]).unwrap()
    }

    #[test]
    fn test_knots_are_sorted() {
        let curve = LinearInterpolator::new(&[1.0, 0.0, 0.25], &[5.1, 5.3, 5.4]).unwrap();
        assert_eq!(curve.knots(), &[(0.0, 5.3), (0.25, 5.4), (1.0, 5.1)]);
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            LinearInterpolator::new(&[0.0], &[1.0]).unwrap_err(),
            InterpolationError::TooFewKnots(1)
        );
        assert_eq!(
            LinearInterpolator::new(&[0.0, 1.0, 2.0], &[1.0, 2.0]).unwrap_err(),
            InterpolationError::LengthMismatch { knots: 3, values: 2 }
        );
        assert_eq!(
            LinearInterpolator::new(&[0.5, 0.0, 0.5], &[1.0, 2.0, 3.0]).unwrap_err(),
            InterpolationError::BadKnot(0.5)
        );
        assert!(matches!(
            LinearInterpolator::new(&[0.0, f64::NAN], &[1.0, 2.0]),
            Err(InterpolationError::BadKnot(_))
        ));
    }

    #[test]
    fn test_values_on_and_between_knots() {
        let curve = pillars();
        assert_abs_diff_eq!(curve.interpolate(0.0).unwrap(), 5.3, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.interpolate(0.25).unwrap(), 5.4, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.interpolate(1.0).unwrap(), 5.1, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.interpolate(0.125).unwrap(), 5.35, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.interpolate(0.625).unwrap(), 5.25, epsilon = 1e-12);
    }

    #[test]
    fn test_strict_query_outside_knots() {
        let curve = pillars();
        assert_eq!(
            curve.interpolate(-0.5).unwrap_err(),
            InterpolationError::OutOfRange {
                at: -0.5,
                first: 0.0,
                last: 1.0
            }
        );
        assert!(curve.interpolate(1.01).is_err());
    }

    #[test]
    fn test_clamped_query_holds_end_values() {
        let curve = pillars();
        assert_eq!(curve.interpolate_clamped(-3.0), 5.3);
        assert_eq!(curve.interpolate_clamped(30.0), 5.1);
        assert_abs_diff_eq!(curve.interpolate_clamped(0.125), 5.35, epsilon = 1e-12);
    }

    #[test]
    fn test_single_precision() {
        let curve = LinearInterpolator::new(&[0.0f32, 2.0], &[1.0f32, 3.0]).unwrap();
        assert!((curve.interpolate(1.0).unwrap() - 2.0).abs() < 1e-6);
    }
}
