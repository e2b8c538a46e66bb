//! Benchmarks for the simulator tick and snapshot copy.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fx_core::types::PairCatalog;
use fx_feed::presentation::RowBook;
use fx_feed::simulator::{RateSimulator, WalkParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn subscribed_simulator(tick_probability: f64) -> RateSimulator {
    let params = WalkParams {
        tick_probability,
        ..WalkParams::default()
    };
    let mut sim = RateSimulator::new(params, StdRng::seed_from_u64(7));
    sim.initialize();
    sim.set_subscription(&PairCatalog::standard().ids());
    sim
}

fn bench_tick(c: &mut Criterion) {
    let mut sparse = subscribed_simulator(0.08);
    c.bench_function("tick_24_pairs_default_probability", |b| {
        b.iter(|| black_box(sparse.tick()))
    });

    let mut dense = subscribed_simulator(1.0);
    c.bench_function("tick_24_pairs_every_pair_moves", |b| {
        b.iter(|| black_box(dense.tick()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let sim = subscribed_simulator(0.08);
    c.bench_function("snapshot_24_pairs", |b| b.iter(|| black_box(sim.snapshot())));
}

fn bench_row_book(c: &mut Criterion) {
    let mut sim = subscribed_simulator(1.0);
    let mut book = RowBook::new(Duration::from_millis(600));
    c.bench_function("row_book_apply_24_pairs", |b| {
        b.iter(|| {
            if let Some(snapshot) = sim.tick() {
                book.apply(black_box(&snapshot));
            }
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_row_book);
criterion_main!(benches);
