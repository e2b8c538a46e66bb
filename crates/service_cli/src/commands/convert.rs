//! Convert command implementation
//!
//! Converts an amount between a pair's legs at the simulated spot.

use fx_core::analytics::Conversion;
use fx_feed::config::FeedConfig;
use fx_feed::presentation::{format_amount, format_rate};
use tracing::info;

use super::{lookup_pair, spot_rate};
use crate::{CliError, Result};

/// Run the convert command
pub fn run(
    config: &FeedConfig,
    pair_id: &str,
    amount: f64,
    reverse: bool,
    json: bool,
) -> Result<()> {
    let pair = lookup_pair(pair_id)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }

    let spot = spot_rate(config, pair)?;
    let conversion = Conversion::for_pair(pair, amount, spot, reverse)
        .ok_or_else(|| CliError::InvalidArgument(format!("unusable spot {}", spot)))?;
    info!(pair = %pair.id(), reverse, "Amount converted");

    if json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
        return Ok(());
    }

    println!("{} {}  spot {}", pair.flag(), pair.code(), format_rate(spot, pair));
    println!(
        "{} {} = {} {}",
        format_amount(conversion.amount),
        conversion.from.code(),
        format_amount(conversion.converted),
        conversion.to.code()
    );
    Ok(())
}
