//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod convert;
pub mod curves;
pub mod forward;
pub mod order;
pub mod pairs;
pub mod stream;
pub mod technicals;

use fx_core::types::{CurrencyPair, PairCatalog};
use fx_feed::config::FeedConfig;
use fx_feed::simulator::RateSimulator;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{CliError, Result};

/// Look up a catalog pair by id.
pub(crate) fn lookup_pair(pair_id: &str) -> Result<&'static CurrencyPair> {
    PairCatalog::standard()
        .get(pair_id.trim())
        .ok_or_else(|| CliError::UnknownPair(pair_id.to_string()))
}

/// Current bid of `pair` from a freshly initialised simulator.
pub(crate) fn spot_rate(config: &FeedConfig, pair: &CurrencyPair) -> Result<f64> {
    let mut sim = RateSimulator::from_config(config);
    sim.initialize();
    sim.rate(pair.id().as_str())
        .map(|r| r.bid)
        .ok_or_else(|| CliError::UnknownPair(pair.id().to_string()))
}

/// RNG for mock generators, seeded like the simulator.
pub(crate) fn mock_rng(config: &FeedConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_pair() {
        assert_eq!(lookup_pair(" EURUSD-OFF ").unwrap().code(), "EUR/USD");
        assert!(matches!(lookup_pair("XYZ"), Err(CliError::UnknownPair(_))));
    }

    #[test]
    fn test_spot_rate_is_seed_bid() {
        let pair = lookup_pair("USDINR-OFF").unwrap();
        assert_eq!(spot_rate(&FeedConfig::default(), pair).unwrap(), 90.57);
    }
}
