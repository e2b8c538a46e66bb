//! Stochastic multi-pair rate simulator.
//!
//! Owns the authoritative rate table for one feed instance. Rates are seeded
//! from static base quotes, given a randomised previous close, open and
//! session range on [`RateSimulator::initialize`], and then walked on every
//! [`RateSimulator::tick`]:
//!
//! - each subscribed pair moves with probability `tick_probability`
//! - a move is uniform within `+-walk_fraction * bid`
//! - `ask` is recomputed from [`spread_for_bid`]
//! - `high`/`low` only ever widen
//!
//! Consumers only ever see [`RateSnapshot`] copies.

use chrono::Utc;
use fx_core::math::round_dp;
use fx_core::types::{Direction, PairId, RateSnapshot, RateState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};

use crate::config::FeedConfig;

/// Static base quote for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedRate {
    /// Pair id
    pub pair_id: &'static str,
    /// Seed bid
    pub bid: f64,
    /// Quoting precision
    pub decimals: u32,
}

const fn seed(pair_id: &'static str, bid: f64, decimals: u32) -> SeedRate {
    SeedRate {
        pair_id,
        bid,
        decimals,
    }
}

/// Base quotes for the standard catalog.
pub const SEED_RATES: [SeedRate; 24] = [
    seed("USDINR-OFF", 90.5700, 4),
    seed("NDF-USDINR", 90.5467, 4),
    seed("USDJPY-OFF", 154.273, 3),
    seed("USDCNY-OFF", 6.9109, 4),
    seed("CNYINR-OFF", 13.0977, 4),
    seed("CHFINR-OFF", 117.9700, 4),
    seed("GBPSEK-OFF", 13.4861, 4),
    seed("NZDUSD-OFF", 0.60492, 5),
    seed("AUDUSD-OFF", 0.70786, 5),
    seed("EURINR-OFF", 107.7450, 4),
    seed("JPYINR-OFF", 0.5869, 4),
    seed("GBPINR-OFF", 123.5989, 4),
    seed("EURUSD-OFF", 1.19004, 5),
    seed("EURGBP-OFF", 0.8717, 4),
    seed("USDINR-ON", 90.4200, 4),
    seed("EURINR-ON", 107.5100, 4),
    seed("GBPINR-ON", 123.2800, 4),
    seed("JPYINR-ON", 0.5852, 4),
    seed("USDJPY-ON", 154.450, 3),
    seed("EURUSD-ON", 1.18850, 5),
    seed("GBPUSD-ON", 1.36250, 5),
    seed("AUDUSD-ON", 0.70650, 5),
    seed("USDCNY-ON", 6.9200, 4),
    seed("USDSGD-ON", 1.3285, 4),
];

/// Looks up the base quote of a pair.
pub fn seed_rate(pair_id: &str) -> Option<&'static SeedRate> {
    SEED_RATES.iter().find(|s| s.pair_id == pair_id)
}

/// Quoted spread for a bid, by magnitude band.
///
/// ```
/// use fx_feed::simulator::spread_for_bid;
///
/// assert_eq!(spread_for_bid(154.27), 0.01);
/// assert_eq!(spread_for_bid(6.91), 0.001);
/// assert_eq!(spread_for_bid(1.19), 0.0001);
/// assert_eq!(spread_for_bid(0.605), 0.00003);
/// ```
pub fn spread_for_bid(bid: f64) -> f64 {
    if bid > 100.0 {
        0.01
    } else if bid > 10.0 {
        0.001
    } else if bid > 1.0 {
        0.0001
    } else {
        0.00003
    }
}

/// Random-walk parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Per-pair probability of a move on each tick
    pub tick_probability: f64,
    /// Maximum move as a fraction of bid
    pub walk_fraction: f64,
    /// Previous-close offset as a fraction of bid
    pub close_offset_fraction: f64,
    /// Open gap as a fraction of bid
    pub open_gap_fraction: f64,
    /// Session range margin as a fraction of bid
    pub range_fraction: f64,
    /// Scale on the range margin
    pub range_scale: f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self::from(&FeedConfig::default())
    }
}

impl From<&FeedConfig> for WalkParams {
    fn from(config: &FeedConfig) -> Self {
        Self {
            tick_probability: config.tick_probability,
            walk_fraction: config.walk_fraction,
            close_offset_fraction: config.close_offset_fraction,
            open_gap_fraction: config.open_gap_fraction,
            range_fraction: config.range_fraction,
            range_scale: config.range_scale,
        }
    }
}

/// Rate engine for one feed instance.
#[derive(Debug)]
pub struct RateSimulator {
    params: WalkParams,
    rng: StdRng,
    rates: BTreeMap<PairId, RateState>,
    subscribed: Vec<PairId>,
}

impl RateSimulator {
    /// Create a simulator with explicit parameters and RNG.
    pub fn new(params: WalkParams, rng: StdRng) -> Self {
        Self {
            params,
            rng,
            rates: BTreeMap::new(),
            subscribed: Vec::new(),
        }
    }

    /// Create a simulator from configuration, seeded from `config.seed` or entropy.
    pub fn from_config(config: &FeedConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(WalkParams::from(config), rng)
    }

    /// Create a simulator with default parameters and a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(WalkParams::default(), StdRng::seed_from_u64(seed))
    }

    /// Walk parameters.
    pub fn params(&self) -> &WalkParams {
        &self.params
    }

    /// (Re)builds the rate table from [`SEED_RATES`], replacing any prior state.
    pub fn initialize(&mut self) {
        let now = Utc::now();
        let p = self.params;
        self.rates.clear();

        for seed in SEED_RATES.iter() {
            let d = seed.decimals;
            let bid = round_dp(seed.bid, d);
            let spread = spread_for_bid(bid);

            let close_delta = (self.rng.gen::<f64>() - 0.48) * bid * p.close_offset_fraction;
            let close = round_dp(bid - close_delta, d);

            let open_gap = (self.rng.gen::<f64>() - 0.5) * bid * p.open_gap_fraction;
            let open = round_dp(close + open_gap, d);

            let change = round_dp(bid - close, d);
            let change_pct = round_dp(change / close * 100.0, 4);

            let margin = bid * p.range_fraction * p.range_scale;
            let low = round_dp(bid.min(open) - self.rng.gen::<f64>() * margin, d);
            let high = round_dp(bid.max(open) + self.rng.gen::<f64>() * margin, d);

            let pair_id = PairId::from(seed.pair_id);
            self.rates.insert(
                pair_id.clone(),
                RateState {
                    pair_id,
                    bid,
                    ask: round_dp(bid + spread, d + 1),
                    spread: round_dp(spread, d + 1),
                    open,
                    high,
                    low,
                    close,
                    change,
                    change_pct,
                    decimals: d,
                    last_updated: now,
                    bid_direction: Direction::Flat,
                    ask_direction: Direction::Flat,
                },
            );
        }
    }

    /// Returns true once [`RateSimulator::initialize`] has run and state has
    /// not been disposed.
    pub fn is_initialized(&self) -> bool {
        !self.rates.is_empty()
    }

    /// Replaces the subscribed pair set.
    ///
    /// Ids without a seed quote are dropped and returned so the caller can
    /// report them. The kept set is deduplicated and ordered.
    pub fn set_subscription(&mut self, pair_ids: &[PairId]) -> Vec<PairId> {
        let mut kept = BTreeSet::new();
        let mut dropped = Vec::new();
        for id in pair_ids {
            if seed_rate(id.as_str()).is_some() {
                kept.insert(id.clone());
            } else if !dropped.contains(id) {
                dropped.push(id.clone());
            }
        }
        self.subscribed = kept.into_iter().collect();
        dropped
    }

    /// Clears the subscription.
    pub fn clear_subscription(&mut self) {
        self.subscribed.clear();
    }

    /// Currently subscribed known pairs.
    pub fn subscribed(&self) -> &[PairId] {
        &self.subscribed
    }

    /// Copy of the subscribed pairs' current state.
    pub fn snapshot(&self) -> RateSnapshot {
        self.subscribed
            .iter()
            .filter_map(|id| self.rates.get(id).cloned())
            .collect()
    }

    /// Current state of any initialised pair, subscribed or not.
    pub fn rate(&self, pair_id: &str) -> Option<RateState> {
        self.rates.get(pair_id).cloned()
    }

    /// Advances the walk by one step.
    ///
    /// Returns a fresh snapshot if at least one subscribed pair moved, and
    /// `None` otherwise.
    pub fn tick(&mut self) -> Option<RateSnapshot> {
        let now = Utc::now();
        let p = self.params;
        let mut changed = false;

        for id in &self.subscribed {
            if self.rng.gen::<f64>() >= p.tick_probability {
                continue;
            }
            let Some(prev) = self.rates.get_mut(id) else {
                continue;
            };

            let d = prev.decimals;
            let delta = (self.rng.gen::<f64>() - 0.5) * 2.0 * prev.bid * p.walk_fraction;
            let bid = round_dp(prev.bid + delta, d);
            let spread = round_dp(spread_for_bid(bid), d + 1);
            let ask = round_dp(bid + spread, d + 1);
            let change = round_dp(bid - prev.close, d);

            prev.bid_direction = Direction::between(prev.bid, bid);
            prev.ask_direction = Direction::between(prev.ask, ask);
            prev.bid = bid;
            prev.ask = ask;
            prev.spread = spread;
            prev.high = round_dp(prev.high.max(bid), d);
            prev.low = round_dp(prev.low.min(bid), d);
            prev.change = change;
            prev.change_pct = round_dp(change / prev.close * 100.0, 4);
            prev.last_updated = now;
            changed = true;
        }

        changed.then(|| self.snapshot())
    }

    /// Drops all rate state and the subscription.
    pub fn dispose(&mut self) {
        self.rates.clear();
        self.subscribed.clear();
    }
}
