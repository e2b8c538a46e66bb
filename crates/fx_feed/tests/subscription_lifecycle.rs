//! Lifecycle scenarios across channel, store and presentation adapters.

use fx_core::types::{Direction, PairCatalog, PairId, RateSnapshot};
use fx_feed::channel::{queue_sink, ChannelState, MockRateChannel, RateChannel};
use fx_feed::config::FeedConfig;
use fx_feed::presentation::RowBook;
use fx_feed::store::{LiveRateStore, SubscriptionKey};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

fn ids(list: &[&str]) -> Vec<PairId> {
    list.iter().map(|s| PairId::from(*s)).collect()
}

fn config(tick_probability: f64) -> FeedConfig {
    FeedConfig {
        tick_probability,
        seed: Some(2024),
        ..FeedConfig::default()
    }
}

/// Factory that counts the channels it builds.
fn counting_store(tick_probability: f64) -> (LiveRateStore, Arc<AtomicUsize>) {
    let created = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&created);
    let cfg = config(tick_probability);
    let factory = move || -> Box<dyn RateChannel> {
        counter.fetch_add(1, Ordering::SeqCst);
        Box::new(MockRateChannel::from_config(&cfg))
    };
    (LiveRateStore::new(Arc::new(factory)), created)
}

// ================================================================
// Store key stability
// ================================================================

#[test]
fn test_key_is_order_independent() {
    let a = SubscriptionKey::new(&ids(&["EURUSD-OFF", "USDINR-OFF"]));
    let b = SubscriptionKey::new(&ids(&["USDINR-OFF", "EURUSD-OFF"]));
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn test_reordered_pairs_reuse_the_lifecycle() {
    let (mut store, created) = counting_store(1.0);

    assert!(store.activate(&ids(&["EURUSD-OFF", "USDINR-OFF"])).unwrap());
    assert!(!store.activate(&ids(&["USDINR-OFF", "EURUSD-OFF"])).unwrap());
    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(store.lifecycle_count(), 1);

    assert!(store.activate(&ids(&["USDINR-OFF"])).unwrap());
    assert_eq!(created.load(Ordering::SeqCst), 2);
    assert_eq!(store.lifecycle_count(), 2);
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_independent_stores_do_not_share_engines() {
    let (mut left, left_created) = counting_store(1.0);
    let (mut right, right_created) = counting_store(1.0);
    left.activate(&ids(&["EURUSD-OFF"])).unwrap();
    right.activate(&ids(&["EURUSD-OFF"])).unwrap();
    assert_eq!(left_created.load(Ordering::SeqCst), 1);
    assert_eq!(right_created.load(Ordering::SeqCst), 1);

    drop(left);
    let mut rx = right.watch();
    rx.changed().await.unwrap();
    assert!(right.is_connected());
}

// ================================================================
// Channel contract
// ================================================================

#[tokio::test(start_paused = true)]
async fn test_unknown_pair_is_ignored() {
    let mut channel = MockRateChannel::from_config(&config(1.0));
    channel.connect().unwrap();

    let seen: Arc<Mutex<Vec<RateSnapshot>>> = Arc::default();
    let sink = Arc::clone(&seen);
    channel
        .subscribe(
            &ids(&["EURUSD-OFF", "NOT-A-PAIR"]),
            Box::new(move |s| sink.lock().unwrap().push(s)),
        )
        .unwrap();

    tokio::time::sleep(Duration::from_millis(650)).await;
    channel.disconnect();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 4);
    for snapshot in seen.iter() {
        let got: Vec<&str> = snapshot.ids().map(PairId::as_str).collect();
        assert_eq!(got, vec!["EURUSD-OFF"]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_no_change_means_no_callback() {
    let mut channel = MockRateChannel::from_config(&config(0.0));
    channel.connect().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    channel
        .subscribe(
            &PairCatalog::standard().ids(),
            Box::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_resubscribe_after_unsubscribe_keeps_one_timer() {
    let mut channel = MockRateChannel::from_config(&config(1.0));
    channel.connect().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let c = Arc::clone(&calls);
        channel
            .subscribe(
                &ids(&["USDINR-ON"]),
                Box::new(move |_| {
                    c.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();
        channel.unsubscribe();
        channel.unsubscribe();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let c = Arc::clone(&calls);
    channel
        .subscribe(
            &ids(&["USDINR-ON"]),
            Box::new(move |_| {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();
    tokio::time::sleep(Duration::from_millis(450)).await;
    // initial delivery plus ticks at 200 and 400 ms
    assert_eq!(calls.load(Ordering::SeqCst), 6);

    channel.disconnect();
    channel.disconnect();
    assert_eq!(channel.state(), ChannelState::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_queue_sink_feeds_an_async_consumer() {
    let mut channel = MockRateChannel::from_config(&config(1.0));
    channel.connect().unwrap();
    let (tx, rx) = async_channel::bounded(4);
    channel.subscribe(&ids(&["GBPUSD-ON"]), queue_sink(tx)).unwrap();

    let first = rx.recv().await.unwrap();
    let second = rx.recv().await.unwrap();
    assert!(first.contains("GBPUSD-ON"));
    assert!(second.contains("GBPUSD-ON"));
    channel.disconnect();
}

// ================================================================
// Presentation
// ================================================================

#[tokio::test(start_paused = true)]
async fn test_row_book_flashes_then_expires() {
    let mut store = LiveRateStore::mock(&config(1.0));
    store.activate(&ids(&["USDJPY-OFF"])).unwrap();

    let ttl = Duration::from_millis(600);
    let mut book = RowBook::new(ttl);
    let t0 = Instant::now();
    book.apply_at(&store.snapshot(), t0);
    assert_eq!(book.bid_flash("USDJPY-OFF", t0), Direction::Flat);

    // same snapshot twice: unchanged, so neutral
    book.apply_at(&store.snapshot(), t0);
    assert_eq!(book.bid_flash("USDJPY-OFF", t0), Direction::Flat);

    let mut rx = store.watch();
    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().snapshot.clone();
    book.apply_at(&snapshot, t0);

    let row = book.row("USDJPY-OFF").unwrap();
    let rate = snapshot.get("USDJPY-OFF").unwrap();
    assert_eq!(row.bid.direction(), rate.bid_direction);
    assert_eq!(book.bid_flash("USDJPY-OFF", t0 + ttl), Direction::Flat);
}
