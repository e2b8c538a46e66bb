//! Row flash state.
//!
//! Each side of a row remembers the last value it saw. A delivery carrying a
//! different value records the direction and bumps a trigger counter so a
//! repeated direction still restarts the animation; a delivery carrying the
//! same value resets the side to [`Direction::Flat`].

use fx_core::types::{Direction, PairId, RateSnapshot, RateState};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Flash state of one price (bid or ask).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashSide {
    previous: Option<f64>,
    direction: Direction,
    trigger: u64,
    changed_at: Option<Instant>,
}

impl FlashSide {
    /// Feed the next value.
    pub fn observe(&mut self, value: f64, now: Instant) {
        match self.previous {
            Some(prev) if prev != value => {
                self.direction = Direction::between(prev, value);
                self.trigger += 1;
                self.changed_at = Some(now);
            }
            _ => {
                self.direction = Direction::Flat;
                self.changed_at = None;
            }
        }
        self.previous = Some(value);
    }

    /// Direction recorded by the last observation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of changes seen so far.
    pub fn trigger(&self) -> u64 {
        self.trigger
    }

    /// Last observed value.
    pub fn previous(&self) -> Option<f64> {
        self.previous
    }

    /// Direction to render at `now`; `Flat` once `ttl` has elapsed.
    pub fn active_direction(&self, now: Instant, ttl: Duration) -> Direction {
        match self.changed_at {
            Some(at) if now.saturating_duration_since(at) < ttl => self.direction,
            _ => Direction::Flat,
        }
    }
}

/// Bid and ask flash state of one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFlash {
    /// Bid side
    pub bid: FlashSide,
    /// Ask side
    pub ask: FlashSide,
}

impl RowFlash {
    /// Feed a rate delivered now.
    pub fn observe(&mut self, rate: &RateState) {
        self.observe_at(rate, Instant::now());
    }

    /// Feed a rate delivered at `now`.
    pub fn observe_at(&mut self, rate: &RateState, now: Instant) {
        self.bid.observe(rate.bid, now);
        self.ask.observe(rate.ask, now);
    }
}

/// Flash state for every row of a table.
#[derive(Debug, Clone)]
pub struct RowBook {
    rows: HashMap<PairId, RowFlash>,
    ttl: Duration,
}

impl RowBook {
    /// Create an empty book whose flashes last `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            rows: HashMap::new(),
            ttl,
        }
    }

    /// Flash lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Feed a snapshot delivered now.
    pub fn apply(&mut self, snapshot: &RateSnapshot) {
        self.apply_at(snapshot, Instant::now());
    }

    /// Feed a snapshot delivered at `now`.
    ///
    /// Rows absent from the snapshot are forgotten.
    pub fn apply_at(&mut self, snapshot: &RateSnapshot, now: Instant) {
        self.rows.retain(|id, _| snapshot.contains(id.as_str()));
        for (id, rate) in snapshot {
            self.rows.entry(id.clone()).or_default().observe_at(rate, now);
        }
    }

    /// Flash state of a row.
    pub fn row(&self, pair_id: &str) -> Option<&RowFlash> {
        self.rows.get(pair_id)
    }

    /// Bid direction to render for a row at `now`.
    pub fn bid_flash(&self, pair_id: &str, now: Instant) -> Direction {
        self.rows
            .get(pair_id)
            .map_or(Direction::Flat, |r| r.bid.active_direction(now, self.ttl))
    }

    /// Ask direction to render for a row at `now`.
    pub fn ask_flash(&self, pair_id: &str, now: Instant) -> Direction {
        self.rows
            .get(pair_id)
            .map_or(Direction::Flat, |r| r.ask.active_direction(now, self.ttl))
    }

    /// Number of tracked rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are tracked.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
