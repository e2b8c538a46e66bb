//! Technicals command implementation
//!
//! Runs moving averages, oscillators and pivot points over mock daily
//! history and prints the summary verdict.

use chrono::Utc;
use fx_core::analytics::{SignalTally, TechnicalReport};
use fx_feed::config::FeedConfig;
use fx_feed::mock::historical_candles;
use fx_feed::presentation::format_rate;
use serde_json::json;
use tracing::info;

use super::{lookup_pair, spot_rate};
use crate::Result;

/// Run the technicals command
pub fn run(config: &FeedConfig, pair_id: &str, days: u32, json: bool) -> Result<()> {
    let pair = lookup_pair(pair_id)?;
    let current = spot_rate(config, pair)?;
    let candles = historical_candles(pair.id().as_str(), days, Utc::now().date_naive());
    let report = TechnicalReport::from_candles(&candles, current);
    info!(pair = %pair.id(), candles = candles.len(), verdict = %report.summary.overall, "Technical report built");

    if json {
        let doc = json!({ "pair": pair.id(), "current_rate": current, "report": report });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!(
        "{} {}  current {}  ({} daily candles)",
        pair.flag(),
        pair.code(),
        format_rate(current, pair),
        candles.len()
    );

    println!();
    println!("Moving averages");
    for ma in &report.moving_averages {
        println!("  SMA({:<3}) {:>12.4}  {}", ma.period, ma.value, ma.signal);
    }
    if report.moving_averages.is_empty() {
        println!("  (not enough history)");
    }

    println!();
    println!("Oscillators");
    for s in &report.signals {
        println!("  {:<9} {:>12.4}  {}", s.indicator, s.value, s.signal);
    }

    if let Some(pivots) = &report.pivot_points {
        println!();
        println!("Pivot points");
        for (label, level) in pivots.levels() {
            println!("  {:<5} {:>12.4}", label, level);
        }
    }

    println!();
    print_tally("Moving averages", &report.summary.moving_averages);
    print_tally("Oscillators", &report.summary.oscillators);
    print_tally("Overall", &report.summary.combined());
    println!("Verdict: {}", report.summary.overall.label());
    Ok(())
}

fn print_tally(title: &str, tally: &SignalTally) {
    println!(
        "{:<16} buy {:>2} ({:>5.1}%)  sell {:>2} ({:>5.1}%)  neutral {:>2} ({:>5.1}%)",
        title,
        tally.buy,
        tally.buy_pct(),
        tally.sell,
        tally.sell_pct(),
        tally.neutral,
        tally.neutral_pct()
    );
}
