//! Timer-driven channel over a [`RateSimulator`].

use fx_core::types::PairId;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::{ChannelState, RateChannel, TickCallback};
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::simulator::RateSimulator;

/// State shared with the timer task.
struct Shared {
    simulator: RateSimulator,
    callback: Option<TickCallback>,
    /// Bumped on every subscribe/unsubscribe; a timer task stops as soon as
    /// it observes a generation other than its own.
    generation: u64,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Simulated rate channel.
///
/// Each instance owns its own simulator and at most one timer task. The
/// timer runs on the tokio runtime current at `subscribe` time and skips
/// missed ticks instead of bursting to catch up.
pub struct MockRateChannel {
    shared: Arc<Mutex<Shared>>,
    state: ChannelState,
    tick_interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl MockRateChannel {
    /// Create a channel over `simulator`, ticking every `tick_interval`.
    pub fn new(simulator: RateSimulator, tick_interval: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                simulator,
                callback: None,
                generation: 0,
            })),
            state: ChannelState::Disconnected,
            tick_interval,
            timer: None,
        }
    }

    /// Create a channel from configuration.
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(RateSimulator::from_config(config), config.tick_interval())
    }

    /// Tick cadence.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Returns true while a timer task is attached.
    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn stop_delivery(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut shared = lock(&self.shared);
        shared.generation = shared.generation.wrapping_add(1);
        shared.callback = None;
    }

    fn spawn_timer(&self, handle: &Handle, generation: u64) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let period = self.tick_interval;

        handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                let mut guard = lock(&shared);
                if guard.generation != generation {
                    break;
                }
                let Shared {
                    simulator,
                    callback,
                    ..
                } = &mut *guard;

                match simulator.tick() {
                    Some(snapshot) => {
                        debug!(pairs = snapshot.len(), "Tick emitted");
                        if let Some(cb) = callback.as_mut() {
                            cb(snapshot);
                        }
                    }
                    None => debug!("No pair moved; tick suppressed"),
                }
            }
        })
    }
}

impl RateChannel for MockRateChannel {
    fn connect(&mut self) -> Result<(), FeedError> {
        if self.state != ChannelState::Disconnected {
            debug!(state = %self.state, "Connect on live channel ignored");
            return Ok(());
        }
        lock(&self.shared).simulator.initialize();
        self.state = ChannelState::Connected;
        info!("Mock rate channel connected");
        Ok(())
    }

    fn subscribe(&mut self, pair_ids: &[PairId], on_tick: TickCallback) -> Result<(), FeedError> {
        if self.state == ChannelState::Disconnected {
            return Err(FeedError::NotConnected);
        }
        if self.tick_interval.is_zero() {
            return Err(FeedError::ZeroTickInterval);
        }
        let handle = Handle::try_current().map_err(|_| FeedError::NoRuntime)?;

        self.stop_delivery();

        let generation = {
            let mut shared = lock(&self.shared);
            let dropped = shared.simulator.set_subscription(pair_ids);
            if !dropped.is_empty() {
                warn!(?dropped, "Ignoring pair ids without a rate source");
            }

            let mut on_tick = on_tick;
            on_tick(shared.simulator.snapshot());
            shared.callback = Some(on_tick);
            shared.generation
        };

        self.timer = Some(self.spawn_timer(&handle, generation));
        self.state = ChannelState::Subscribed;
        info!(
            requested = pair_ids.len(),
            interval_ms = self.tick_interval.as_millis() as u64,
            "Mock rate channel subscribed"
        );
        Ok(())
    }

    fn unsubscribe(&mut self) {
        if self.state != ChannelState::Subscribed {
            return;
        }
        self.stop_delivery();
        lock(&self.shared).simulator.clear_subscription();
        self.state = ChannelState::Connected;
        info!("Mock rate channel unsubscribed");
    }

    fn disconnect(&mut self) {
        if self.state == ChannelState::Disconnected {
            return;
        }
        self.unsubscribe();
        lock(&self.shared).simulator.dispose();
        self.state = ChannelState::Disconnected;
        info!("Mock rate channel disconnected");
    }

    fn state(&self) -> ChannelState {
        self.state
    }
}

impl Drop for MockRateChannel {
    fn drop(&mut self) {
        self.stop_delivery();
    }
}
