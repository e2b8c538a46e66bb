//! Subscription channel contract between a rate engine and its consumer.
//!
//! A channel moves through three named states:
//!
//! ```text
//! Disconnected --connect--> Connected --subscribe--> Subscribed
//!      ^                        ^  |                     |
//!      |                        |  +-----disconnect------+--> Disconnected
//!      +------disconnect--------+<------unsubscribe------+
//! ```
//!
//! `subscribe` delivers the current snapshot synchronously before returning
//! and then delivers periodically. Calling it again replaces both the pair
//! list and the callback. `unsubscribe` and `disconnect` are idempotent and
//! guarantee that no callback runs after they return.

mod mock;

pub use mock::MockRateChannel;

use async_channel::{Sender, TrySendError};
use fx_core::types::{PairId, RateSnapshot};
use std::fmt;
use tracing::{debug, warn};

use crate::error::FeedError;

/// Delivery callback invoked with each emitted snapshot.
pub type TickCallback = Box<dyn FnMut(RateSnapshot) + Send + 'static>;

/// Lifecycle state of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelState {
    /// No engine resources held
    #[default]
    Disconnected,
    /// Engine initialised, not delivering
    Connected,
    /// Delivering snapshots to a callback
    Subscribed,
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChannelState::Disconnected => "disconnected",
            ChannelState::Connected => "connected",
            ChannelState::Subscribed => "subscribed",
        };
        write!(f, "{}", s)
    }
}

/// Connect/subscribe lifecycle of a rate source.
pub trait RateChannel: Send {
    /// Acquire engine resources. A no-op when already connected.
    fn connect(&mut self) -> Result<(), FeedError>;

    /// Start delivering snapshots for `pair_ids` to `on_tick`.
    ///
    /// # Errors
    ///
    /// `FeedError::NotConnected` when called before `connect` or after
    /// `disconnect`.
    fn subscribe(&mut self, pair_ids: &[PairId], on_tick: TickCallback) -> Result<(), FeedError>;

    /// Stop periodic delivery and drop the callback.
    fn unsubscribe(&mut self);

    /// Release all engine resources.
    fn disconnect(&mut self);

    /// Current lifecycle state.
    fn state(&self) -> ChannelState;
}

/// Adapts a bounded queue into a delivery callback.
///
/// A delivery is dropped, not queued, while the consumer has not drained
/// the previous one, so a slow consumer never builds a backlog.
pub fn queue_sink(sender: Sender<RateSnapshot>) -> TickCallback {
    Box::new(move |snapshot| match sender.try_send(snapshot) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            warn!("Consumer queue full; dropping snapshot");
        }
        Err(TrySendError::Closed(_)) => {
            debug!("Consumer queue closed; dropping snapshot");
        }
    })
}
