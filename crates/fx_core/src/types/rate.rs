//! Live rate value types.
//!
//! - [`RateState`]: the per-pair bid/ask/session record
//! - [`RateSnapshot`]: a point-in-time, read-only view of many pairs
//! - [`Direction`]: tick-to-tick movement marker
//!
//! A snapshot is built once and then only read. Looking up a pair that is
//! not in the snapshot yields `None`; callers may over-ask without guarding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::pair::PairId;

/// Movement of a price relative to its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Price increased
    Up,
    /// Price decreased
    Down,
    /// Price unchanged
    #[default]
    Flat,
}

impl Direction {
    /// Classifies the move from `prev` to `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fx_core::types::Direction;
    ///
    /// assert_eq!(Direction::between(1.0, 1.1), Direction::Up);
    /// assert_eq!(Direction::between(1.1, 1.0), Direction::Down);
    /// assert_eq!(Direction::between(1.0, 1.0), Direction::Flat);
    /// ```
    #[inline]
    pub fn between(prev: f64, next: f64) -> Self {
        if next > prev {
            Direction::Up
        } else if next < prev {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// Arrow glyph used in terminal output.
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "\u{2197}",
            Direction::Down => "\u{2198}",
            Direction::Flat => " ",
        }
    }
}

/// Current quote and session statistics for one pair.
///
/// Invariants maintained by the producer:
/// - `ask >= bid` and `ask - bid == spread`
/// - `low <= bid <= high` and `low <= open <= high`
/// - `change == bid - close`, `change_pct == change / close * 100`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateState {
    /// Pair identifier
    pub pair_id: PairId,
    /// Bid price
    pub bid: f64,
    /// Ask price
    pub ask: f64,
    /// Ask minus bid
    pub spread: f64,
    /// Session open
    pub open: f64,
    /// Session high
    pub high: f64,
    /// Session low
    pub low: f64,
    /// Previous session close
    pub close: f64,
    /// Bid minus close
    pub change: f64,
    /// Change as a percentage of close
    pub change_pct: f64,
    /// Quoting precision of the pair
    pub decimals: u32,
    /// Time of the last update
    pub last_updated: DateTime<Utc>,
    /// Bid movement on the last update
    pub bid_direction: Direction,
    /// Ask movement on the last update
    pub ask_direction: Direction,
}

impl RateState {
    /// Mid price.
    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.bid + self.ask)
    }

    /// Position of the bid inside the session range, in percent.
    ///
    /// Returns 50 when the range is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fx_core::types::{Direction, PairId, RateState};
    /// # let mut rate = RateState {
    /// #     pair_id: PairId::from("EURUSD-OFF"), bid: 1.15, ask: 1.1501, spread: 0.0001,
    /// #     open: 1.12, high: 1.20, low: 1.10, close: 1.12, change: 0.03, change_pct: 2.68,
    /// #     decimals: 5, last_updated: chrono::Utc::now(),
    /// #     bid_direction: Direction::Flat, ask_direction: Direction::Flat,
    /// # };
    /// assert!((rate.range_position() - 50.0).abs() < 1e-9);
    /// rate.high = rate.low;
    /// assert_eq!(rate.range_position(), 50.0);
    /// ```
    pub fn range_position(&self) -> f64 {
        let range = self.high - self.low;
        if range > 0.0 {
            (self.bid - self.low) / range * 100.0
        } else {
            50.0
        }
    }
}

/// Point-in-time view of rate states keyed by pair id.
///
/// Consumers receive their own copy; nothing inside refers back to the
/// producer's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateSnapshot {
    rates: BTreeMap<PairId, RateState>,
}

impl RateSnapshot {
    /// An empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rate for a pair, or `None` if the pair is absent.
    pub fn get(&self, id: &str) -> Option<&RateState> {
        self.rates.get(id)
    }

    /// Returns true if the pair is present.
    pub fn contains(&self, id: &str) -> bool {
        self.rates.contains_key(id)
    }

    /// Number of pairs in the snapshot.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the snapshot holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates `(id, rate)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairId, &RateState)> {
        self.rates.iter()
    }

    /// Pair ids in id order.
    pub fn ids(&self) -> impl Iterator<Item = &PairId> {
        self.rates.keys()
    }
}

impl FromIterator<RateState> for RateSnapshot {
    fn from_iter<I: IntoIterator<Item = RateState>>(iter: I) -> Self {
        Self {
            rates: iter
                .into_iter()
                .map(|rate| (rate.pair_id.clone(), rate))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RateSnapshot {
    type Item = (&'a PairId, &'a RateState);
    type IntoIter = std::collections::btree_map::Iter<'a, PairId, RateState>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}
