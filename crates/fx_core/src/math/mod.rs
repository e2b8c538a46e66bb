//! Numeric helpers.
//!
//! - [`round_dp`]: round to a fixed number of decimal places
//! - [`interpolators`]: piecewise linear interpolation

pub mod interpolators;

/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use fx_core::math::round_dp;
///
/// assert_eq!(round_dp(90.57004, 4), 90.57);
/// assert_eq!(round_dp(1.1900461, 5), 1.19005);
/// assert_eq!(round_dp(154.2735, 0), 154.0);
/// ```
#[inline]
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Linear blend `a + t * (b - a)`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp_is_idempotent() {
        for v in [90.5700, 0.5869, 1.19004, 154.273, 13.0977] {
            for d in 0..7 {
                let once = round_dp(v, d);
                assert_eq!(round_dp(once, d), once);
            }
        }
    }

    #[test]
    fn test_round_dp_preserves_grid_values() {
        assert_eq!(round_dp(90.57, 4), 90.57);
        assert_eq!(round_dp(0.60492, 5), 0.60492);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
        assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
    }
}
