//! Render-friendly live rate state over a replaceable channel.
//!
//! [`LiveRateStore`] owns at most one [`RateChannel`] at a time. Activating
//! it with a pair list derives a [`SubscriptionKey`]; re-activating with the
//! same set of pairs, in any order, keeps the current channel, while a
//! different set tears the old channel down before a fresh one is connected.

use chrono::{DateTime, Utc};
use fx_core::types::{PairId, RateSnapshot};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::channel::{MockRateChannel, RateChannel};
use crate::config::FeedConfig;
use crate::error::FeedError;

/// Builds a fresh channel for every store activation.
pub trait ChannelFactory: Send + Sync {
    /// Create a new, disconnected channel.
    fn create(&self) -> Box<dyn RateChannel>;
}

impl<F> ChannelFactory for F
where
    F: Fn() -> Box<dyn RateChannel> + Send + Sync,
{
    fn create(&self) -> Box<dyn RateChannel> {
        self()
    }
}

/// Factory producing independent [`MockRateChannel`]s.
#[derive(Debug, Clone, Default)]
pub struct MockChannelFactory {
    config: FeedConfig,
}

impl MockChannelFactory {
    /// Create a factory that builds channels from `config`.
    pub fn new(config: FeedConfig) -> Self {
        Self { config }
    }
}

impl ChannelFactory for MockChannelFactory {
    fn create(&self) -> Box<dyn RateChannel> {
        Box::new(MockRateChannel::from_config(&self.config))
    }
}

/// Canonical identity of a pair set: ids sorted and deduplicated. The
/// joined text is for display and logging only.
///
/// ```
/// use fx_core::types::PairId;
/// use fx_feed::store::SubscriptionKey;
///
/// let a = SubscriptionKey::new(&[PairId::from("USDINR-OFF"), PairId::from("EURUSD-OFF")]);
/// let b = SubscriptionKey::new(&[PairId::from("EURUSD-OFF"), PairId::from("USDINR-OFF")]);
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "EURUSD-OFF,USDINR-OFF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionKey {
    ids: Vec<PairId>,
    text: String,
}

impl SubscriptionKey {
    /// Derive the key for `pair_ids`.
    pub fn new(pair_ids: &[PairId]) -> Self {
        let mut ids = pair_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        let text = ids.iter().map(PairId::as_str).collect::<Vec<_>>().join(",");
        Self { ids, text }
    }

    /// The canonical id list.
    pub fn ids(&self) -> &[PairId] {
        &self.ids
    }

    /// Joined key text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What a view renders: latest snapshot, connection flag and last tick time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreView {
    /// Latest delivered snapshot; empty before the first delivery
    pub snapshot: RateSnapshot,
    /// Whether a channel is connected
    pub connected: bool,
    /// Wall-clock time of the last delivery
    pub last_tick: Option<DateTime<Utc>>,
}

/// Live rate state for one consumer scope.
pub struct LiveRateStore {
    factory: Arc<dyn ChannelFactory>,
    channel: Option<Box<dyn RateChannel>>,
    key: Option<SubscriptionKey>,
    view: Arc<watch::Sender<StoreView>>,
    lifecycles: u64,
}

impl LiveRateStore {
    /// Create an inactive store over `factory`.
    pub fn new(factory: Arc<dyn ChannelFactory>) -> Self {
        let (view, _) = watch::channel(StoreView::default());
        Self {
            factory,
            channel: None,
            key: None,
            view: Arc::new(view),
            lifecycles: 0,
        }
    }

    /// Create a store backed by simulated channels.
    pub fn mock(config: &FeedConfig) -> Self {
        Self::new(Arc::new(MockChannelFactory::new(config.clone())))
    }

    /// Subscribe to `pair_ids`.
    ///
    /// Returns `Ok(false)` when the pair set is unchanged and the current
    /// channel was kept, `Ok(true)` when a new channel lifecycle started.
    ///
    /// # Errors
    ///
    /// Propagates channel errors; the store is left inactive.
    pub fn activate(&mut self, pair_ids: &[PairId]) -> Result<bool, FeedError> {
        let key = SubscriptionKey::new(pair_ids);
        if self.channel.is_some() && self.key.as_ref() == Some(&key) {
            return Ok(false);
        }

        self.deactivate();

        let mut channel = self.factory.create();
        channel.connect()?;
        self.view.send_modify(|v| v.connected = true);

        let view = Arc::clone(&self.view);
        let on_tick = Box::new(move |snapshot: RateSnapshot| {
            view.send_modify(|v| {
                v.snapshot = snapshot;
                v.last_tick = Some(Utc::now());
            });
        });

        if let Err(e) = channel.subscribe(key.ids(), on_tick) {
            channel.disconnect();
            self.view.send_modify(|v| v.connected = false);
            return Err(e);
        }

        self.lifecycles += 1;
        info!(key = %key, lifecycle = self.lifecycles, "Live rate store activated");
        self.channel = Some(channel);
        self.key = Some(key);
        Ok(true)
    }

    /// Tear down the current channel, if any.
    ///
    /// The last snapshot stays readable; the connected flag clears.
    pub fn deactivate(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.unsubscribe();
            channel.disconnect();
            info!(key = ?self.key.as_ref().map(SubscriptionKey::as_str), "Live rate store deactivated");
        }
        self.key = None;
        self.view.send_modify(|v| v.connected = false);
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> RateSnapshot {
        self.view.borrow().snapshot.clone()
    }

    /// Whether a channel is connected.
    pub fn is_connected(&self) -> bool {
        self.view.borrow().connected
    }

    /// Time of the last delivery.
    pub fn last_tick(&self) -> Option<DateTime<Utc>> {
        self.view.borrow().last_tick
    }

    /// Key of the active subscription.
    pub fn subscription_key(&self) -> Option<&SubscriptionKey> {
        self.key.as_ref()
    }

    /// Number of channel lifecycles started so far.
    pub fn lifecycle_count(&self) -> u64 {
        self.lifecycles
    }

    /// Receiver notified on every view change.
    pub fn watch(&self) -> watch::Receiver<StoreView> {
        self.view.subscribe()
    }
}

impl Drop for LiveRateStore {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<PairId> {
        list.iter().map(|s| PairId::from(*s)).collect()
    }

    fn fast_config() -> FeedConfig {
        FeedConfig {
            tick_probability: 1.0,
            seed: Some(8),
            ..FeedConfig::default()
        }
    }

    #[test]
    fn test_key_dedupes_and_round_trips() {
        let key = SubscriptionKey::new(&ids(&["B", "A", "B"]));
        assert_eq!(key.as_str(), "A,B");
        assert_eq!(key.ids(), ids(&["A", "B"]).as_slice());
        assert!(SubscriptionKey::new(&[]).ids().is_empty());
    }

    #[test]
    fn test_activation_outside_runtime_leaves_store_inactive() {
        let mut store = LiveRateStore::mock(&fast_config());
        assert!(matches!(
            store.activate(&ids(&["EURUSD-OFF"])),
            Err(FeedError::NoRuntime)
        ));
        assert!(!store.is_connected());
        assert!(store.subscription_key().is_none());
        assert_eq!(store.lifecycle_count(), 0);
    }

    #[test]
    fn test_key_keeps_ids_containing_separator() {
        let joined = SubscriptionKey::new(&ids(&["EURUSD-OFF,USDINR-OFF"]));
        let split = SubscriptionKey::new(&ids(&["EURUSD-OFF", "USDINR-OFF"]));
        assert_eq!(joined.as_str(), split.as_str());
        assert_ne!(joined, split);
        assert_eq!(joined.ids().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_id_with_separator_is_an_unknown_pair() {
        let mut store = LiveRateStore::mock(&fast_config());
        store.activate(&ids(&["EURUSD-OFF,USDINR-OFF"])).unwrap();
        assert!(store.is_connected());
        assert!(store.snapshot().is_empty());

        assert!(store.activate(&ids(&["EURUSD-OFF", "USDINR-OFF"])).unwrap());
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.lifecycle_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_tick_interval_fails_activation() {
        let config = FeedConfig {
            tick_interval_ms: 0,
            ..fast_config()
        };
        let mut store = LiveRateStore::mock(&config);
        assert!(matches!(
            store.activate(&ids(&["EURUSD-OFF"])),
            Err(FeedError::ZeroTickInterval)
        ));
        assert!(!store.is_connected());
        assert!(store.subscription_key().is_none());
        assert_eq!(store.lifecycle_count(), 0);
        assert!(store.last_tick().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_delivers_initial_snapshot() {
        let mut store = LiveRateStore::mock(&fast_config());
        assert!(store.snapshot().is_empty());
        assert!(store.last_tick().is_none());

        assert!(store.activate(&ids(&["USDINR-OFF", "EURUSD-OFF"])).unwrap());
        assert!(store.is_connected());
        assert_eq!(store.snapshot().len(), 2);
        assert!(store.last_tick().is_some());
        assert_eq!(
            store.subscription_key().map(SubscriptionKey::as_str),
            Some("EURUSD-OFF,USDINR-OFF")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_sees_ticks() {
        let mut store = LiveRateStore::mock(&fast_config());
        store.activate(&ids(&["USDJPY-ON"])).unwrap();
        let mut rx = store.watch();
        assert!(!rx.has_changed().unwrap());

        rx.changed().await.unwrap();
        let view = rx.borrow_and_update().clone();
        assert!(view.connected);
        assert!(view.snapshot.contains("USDJPY-ON"));
        assert!(view.last_tick.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deactivate_keeps_last_snapshot() {
        let mut store = LiveRateStore::mock(&fast_config());
        store.activate(&ids(&["USDINR-ON"])).unwrap();
        store.deactivate();
        store.deactivate();
        assert!(!store.is_connected());
        assert_eq!(store.snapshot().len(), 1);
        assert!(store.subscription_key().is_none());
    }
}
