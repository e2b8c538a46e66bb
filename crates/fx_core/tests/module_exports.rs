//! Integration tests for module exports.
//!
//! Verifies that public modules and re-exports resolve via absolute paths.

/// Value types are reachable from `fx_core::types`.
#[test]
fn test_types_module_exports() {
    use fx_core::types::error::{CurrencyError, InterpolationError, TenorError};
    use fx_core::types::{Currency, Direction, PairCatalog, PairId, RateSnapshot, Tenor};

    let usd: Currency = "usd".parse().unwrap();
    assert_eq!(usd, Currency::USD);
    assert!(matches!(
        "XXX".parse::<Currency>(),
        Err(CurrencyError::UnknownCurrency(_))
    ));
    assert!(matches!("7Q".parse::<Tenor>(), Err(TenorError::Parse(_))));

    let _ = InterpolationError::TooFewKnots(0);
    assert_eq!(Direction::default(), Direction::Flat);
    assert!(RateSnapshot::empty().is_empty());
    assert!(PairCatalog::standard().contains(PairId::from("USDSGD-ON").as_str()));
}

/// Math helpers are reachable from `fx_core::math`.
#[test]
fn test_math_module_exports() {
    use fx_core::math::interpolators::{Interpolator, LinearInterpolator};
    use fx_core::math::{lerp, round_dp};

    let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 10.0]).unwrap();
    assert_eq!(interp.domain(), (0.0, 1.0));
    assert_eq!(round_dp(lerp(0.0, 10.0, 0.123456), 2), 1.23);
}

/// Analytics re-exports match their defining modules.
#[test]
fn test_analytics_module_exports() {
    use fx_core::analytics::technical::MOVING_AVERAGE_PERIODS;
    use fx_core::analytics::yield_curve::SHAPE_THRESHOLD_PP;
    use fx_core::analytics::{interpolate_forward, CurveShape, Signal, TechnicalReport};

    assert_eq!(MOVING_AVERAGE_PERIODS, [7, 30, 90, 200]);
    assert_eq!(SHAPE_THRESHOLD_PP, 0.12);
    assert!(interpolate_forward(chrono::NaiveDate::MIN, &[], 0.0).is_none());
    assert_eq!(CurveShape::classify(1.0, 1.0), CurveShape::Flat);

    let report = TechnicalReport::from_candles(&[], 1.0);
    assert!(report.moving_averages.is_empty());
    assert_eq!(report.summary.overall, Signal::Neutral);
}
