//! Forward command implementation
//!
//! Builds a mock forward curve off the simulated spot and prices a forward
//! for the requested settlement date.

use chrono::{NaiveDate, Utc};
use fx_core::analytics::interpolate_forward;
use fx_feed::config::FeedConfig;
use fx_feed::mock::forward_curve;
use fx_feed::presentation::{format_amount, format_rate};
use serde_json::json;
use tracing::info;

use super::{lookup_pair, mock_rng, spot_rate};
use crate::{CliError, Result};

/// Run the forward command
pub fn run(
    config: &FeedConfig,
    pair_id: &str,
    date: &str,
    amount: f64,
    differential: f64,
    json: bool,
) -> Result<()> {
    let pair = lookup_pair(pair_id)?;
    let target = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| CliError::InvalidArgument(format!("date '{}': {}", date, e)))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }
    if !differential.is_finite() {
        return Err(CliError::InvalidArgument("differential must be finite".to_string()));
    }

    let spot = spot_rate(config, pair)?;
    let today = Utc::now().date_naive();
    let curve = forward_curve(spot, differential, today, &mut mock_rng(config));
    let quote = interpolate_forward(target, &curve, amount)
        .ok_or_else(|| CliError::InvalidArgument("forward curve is empty".to_string()))?;
    info!(pair = %pair.id(), %target, rows = curve.len(), "Forward priced");

    if json {
        let doc = json!({
            "pair": pair.id(),
            "spot": spot,
            "curve": curve,
            "quote": quote,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} {}  spot {}", pair.flag(), pair.code(), format_rate(spot, pair));
    println!();
    println!(
        "{:<5} {:<11} {:>12} {:>10} {:>9} {:>9}",
        "Tenor", "Settles", "Forward", "Points", "Prem %", "Hedge %"
    );
    for row in &curve {
        println!(
            "{:<5} {:<11} {:>12.4} {:>10.4} {:>9.2} {:>9.2}",
            row.tenor.to_string(),
            row.settlement_date.format("%d-%b-%Y").to_string(),
            row.forward_rate,
            row.forward_points,
            row.annualized_premium_pct,
            row.hedging_cost_pct,
        );
    }

    println!();
    if quote.settlement_date != target {
        println!(
            "Target {} is outside the curve; clamped to {}",
            target, quote.settlement_date
        );
    }
    println!("Settlement      {}", quote.settlement_date.format("%d-%b-%Y"));
    println!("Forward rate    {:.4}", quote.forward_rate);
    println!("Forward points  {:.4}", quote.forward_points);
    println!("Premium         {:.2}% p.a.", quote.annualized_premium_pct);
    println!("Hedging cost    {:.2}%", quote.hedging_cost_pct);
    println!(
        "On {} {}      {} {}",
        format_amount(amount),
        pair.base(),
        format_amount(quote.hedging_cost),
        pair.base()
    );
    Ok(())
}
