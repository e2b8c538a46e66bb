//! # fx_feed: Simulated Live Rates for FxDesk
//!
//! ## Layer 2 (Feed) Role
//!
//! fx_feed turns the static catalog in `fx_core` into a live, ticking rate
//! table and adapts it for display:
//!
//! - [`simulator`]: the per-instance random-walk rate engine
//! - [`channel`]: the connect/subscribe contract and its tokio-timer mock
//! - [`store`]: subscription-key-stable live state for one consumer scope
//! - [`presentation`]: row flash, sparklines, row order and cell formatting
//! - [`mock`]: candle history, forward curves and money-market curves
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Usage Examples
//!
//! ```rust
//! use fx_core::types::PairId;
//! use fx_feed::prelude::*;
//!
//! let mut sim = RateSimulator::seeded(42);
//! sim.initialize();
//! sim.set_subscription(&[PairId::from("EURUSD-OFF"), PairId::from("NOT-A-PAIR")]);
//!
//! let snapshot = sim.snapshot();
//! assert_eq!(snapshot.len(), 1);
//! assert!(snapshot.get("NOT-A-PAIR").is_none());
//! ```

pub mod channel;
pub mod config;
pub mod error;
pub mod mock;
pub mod presentation;
pub mod simulator;
pub mod store;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::channel::{queue_sink, ChannelState, MockRateChannel, RateChannel, TickCallback};
    pub use crate::config::FeedConfig;
    pub use crate::error::{ConfigError, FeedError};
    pub use crate::presentation::{RowBook, RowFlash, RowOrder, Sparkline};
    pub use crate::simulator::{RateSimulator, WalkParams};
    pub use crate::store::{ChannelFactory, LiveRateStore, MockChannelFactory, StoreView, SubscriptionKey};
}
