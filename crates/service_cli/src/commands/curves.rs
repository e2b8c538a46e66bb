//! Curves command implementation
//!
//! Generates money-market curves for both legs of a pair and prints the
//! per-tenor differential.

use chrono::Utc;
use fx_core::analytics::{CurveShape, InterestRateCurve, YieldDifferential};
use fx_feed::config::FeedConfig;
use fx_feed::mock::interest_rate_curve;
use fx_feed::presentation::format_percent;
use serde_json::json;
use tracing::info;

use super::{lookup_pair, mock_rng};
use crate::Result;

/// Year fraction shown as an interpolated extra row.
const NINE_MONTHS: f64 = 0.75;

/// Run the curves command
pub fn run(config: &FeedConfig, pair_id: &str, json: bool) -> Result<()> {
    let pair = lookup_pair(pair_id)?;
    let now = Utc::now();
    let mut rng = mock_rng(config);
    let domestic = interest_rate_curve(pair.base(), now, &mut rng);
    let foreign = interest_rate_curve(pair.quote(), now, &mut rng);
    let diff = YieldDifferential::new(&domestic, &foreign);
    info!(pair = %pair.id(), headline = ?diff.headline(), "Yield differential built");

    if json {
        let doc = json!({
            "pair": pair.id(),
            "domestic": domestic,
            "foreign": foreign,
            "differential": diff,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} {}", pair.flag(), pair.code());
    print_source(&domestic, diff.domestic_shape);
    print_source(&foreign, diff.foreign_shape);

    println!();
    println!(
        "{:<5} {:>9} {:>9} {:>9}",
        "Tenor",
        diff.domestic.code(),
        diff.foreign.code(),
        "Spread"
    );
    for s in &diff.spreads {
        println!(
            "{:<5} {:>8.2}% {:>8.2}% {:>9}",
            s.tenor.to_string(),
            s.domestic,
            s.foreign,
            format_percent(s.spread)
        );
    }
    if let (Some(d), Some(f)) = (domestic.rate_at(NINE_MONTHS), foreign.rate_at(NINE_MONTHS)) {
        println!(
            "{:<5} {:>8.2}% {:>8.2}% {:>9}  (interpolated)",
            "9M",
            d,
            f,
            format_percent(d - f)
        );
    }

    if let Some(headline) = diff.headline() {
        println!();
        println!("1Y differential {}", format_percent(headline));
    }
    Ok(())
}

fn print_source(curve: &InterestRateCurve, shape: Option<CurveShape>) {
    println!(
        "  {} {:<9} as of {}  shape {}",
        curve.currency(),
        curve.source(),
        curve.as_of().format("%Y-%m-%d %H:%M UTC"),
        shape.map_or_else(|| "n/a".to_string(), |s| s.to_string())
    );
}
