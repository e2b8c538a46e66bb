//! Stream command implementation
//!
//! Activates a live rate store for the requested pairs and prints the rate
//! table on every delivery until the time budget runs out.

use chrono::Utc;
use fx_core::types::{PairCatalog, PairId, RateState};
use fx_feed::config::FeedConfig;
use fx_feed::presentation::{
    format_change, format_change_pct, format_rate, format_spread, relative_time, RowBook,
    RowOrder, Sparkline,
};
use fx_feed::store::{LiveRateStore, StoreView};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::order;
use crate::Result;

/// Run the stream command
pub fn run(
    config: &FeedConfig,
    pairs: &[String],
    seconds: u64,
    order_file: &Path,
    json: bool,
) -> Result<()> {
    let catalog = PairCatalog::standard();
    let ids: Vec<PairId> = if pairs.is_empty() {
        catalog.ids()
    } else {
        pairs.iter().map(|p| PairId::from(p.trim())).collect()
    };
    for id in ids.iter().filter(|id| !catalog.contains(id.as_str())) {
        warn!(pair = %id, "Not in the catalog; it will not be quoted");
    }

    let table = Table {
        order: order::load(order_file),
        book: RowBook::new(config.flash_duration()),
        sparklines: HashMap::new(),
        capacity: config.sparkline_capacity,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(stream(config, &ids, Duration::from_secs(seconds), table, json))
}

async fn stream(
    config: &FeedConfig,
    ids: &[PairId],
    budget: Duration,
    mut table: Table,
    json: bool,
) -> Result<()> {
    let mut store = LiveRateStore::mock(config);
    store.activate(ids)?;
    let mut rx = store.watch();
    let deadline = tokio::time::Instant::now() + budget;
    let mut updates = 0u64;

    let mut view = rx.borrow_and_update().clone();
    loop {
        updates += 1;
        if json {
            println!("{}", serde_json::to_string(&view.snapshot)?);
        } else {
            table.observe(&view);
            table.render(&view, updates);
        }

        match tokio::time::timeout_at(deadline, rx.changed()).await {
            Ok(Ok(())) => view = rx.borrow_and_update().clone(),
            Ok(Err(_)) | Err(_) => break,
        }
    }

    store.deactivate();
    info!(updates, lifecycles = store.lifecycle_count(), "Stream finished");
    Ok(())
}

/// Per-row presentation state kept across deliveries.
struct Table {
    order: RowOrder,
    book: RowBook,
    sparklines: HashMap<PairId, Sparkline>,
    capacity: usize,
}

impl Table {
    fn observe(&mut self, view: &StoreView) {
        self.book.apply(&view.snapshot);
        for (id, rate) in &view.snapshot {
            self.sparklines
                .entry(id.clone())
                .or_insert_with(|| Sparkline::new(self.capacity))
                .push(rate.bid);
        }
    }

    fn render(&self, view: &StoreView, updates: u64) {
        let now = Instant::now();
        let catalog = PairCatalog::standard();

        let mut rows: Vec<&RateState> = view.snapshot.iter().map(|(_, r)| r).collect();
        self.order.sort_rows(&mut rows, |r| &r.pair_id);

        println!();
        println!(
            "update {:>4} | {} | {}",
            updates,
            if view.connected { "connected" } else { "disconnected" },
            view.last_tick
                .map_or_else(|| "no ticks".to_string(), |t| t.format("%H:%M:%S%.3f").to_string())
        );
        println!(
            "{:<14} {:>12}  {:>12}  {:>8} {:>10} {:>12} {:>6} {:>5} {:>9}",
            "Pair", "Bid", "Ask", "Spread", "Change", "Change %", "Range", "Trend", "Updated"
        );

        for rate in rows {
            let Some(pair) = catalog.get(rate.pair_id.as_str()) else {
                continue;
            };
            let id = rate.pair_id.as_str();
            let trend = self
                .sparklines
                .get(id)
                .and_then(Sparkline::trend_up)
                .map_or(" ", |up| if up { "\u{2191}" } else { "\u{2193}" });

            println!(
                "{} {:<11} {:>12}{} {:>12}{} {:>8} {:>10} {:>12} {:>5.0}% {:>5} {:>9}",
                pair.flag(),
                pair.display_name(),
                format_rate(rate.bid, pair),
                self.book.bid_flash(id, now).arrow(),
                format_rate(rate.ask, pair),
                self.book.ask_flash(id, now).arrow(),
                format_spread(rate.spread),
                format_change(rate.change),
                format_change_pct(rate.change_pct),
                rate.range_position(),
                trend,
                relative_time(rate.last_updated, Utc::now()),
            );
        }
    }
}
