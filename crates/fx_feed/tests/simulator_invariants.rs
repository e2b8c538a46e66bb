//! Property tests for the rate simulator.

use approx::assert_abs_diff_eq;
use fx_core::types::{PairCatalog, RateState};
use fx_feed::simulator::{spread_for_bid, RateSimulator, WalkParams};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f64 = 1e-9;

fn check_quote(r: &RateState) {
    assert!(r.low <= r.bid + EPS && r.bid <= r.high + EPS, "bid outside range: {:?}", r);
    assert!(r.low <= r.open + EPS && r.open <= r.high + EPS, "open outside range: {:?}", r);
    assert!(r.ask >= r.bid, "crossed quote: {:?}", r);
    assert_abs_diff_eq!(r.ask - r.bid, spread_for_bid(r.bid), epsilon = EPS);
    assert_abs_diff_eq!(r.spread, spread_for_bid(r.bid), epsilon = EPS);
}

fn simulator(seed: u64, tick_probability: f64) -> RateSimulator {
    let params = WalkParams {
        tick_probability,
        ..WalkParams::default()
    };
    let mut sim = RateSimulator::new(params, StdRng::seed_from_u64(seed));
    sim.initialize();
    sim.set_subscription(&PairCatalog::standard().ids());
    sim
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_emission_is_a_valid_quote(
        seed in any::<u64>(),
        ticks in 1usize..300,
        tick_probability in 0.05f64..=1.0,
    ) {
        let mut sim = simulator(seed, tick_probability);
        for (_, r) in &sim.snapshot() {
            check_quote(r);
        }
        for _ in 0..ticks {
            if let Some(snapshot) = sim.tick() {
                for (_, r) in &snapshot {
                    check_quote(r);
                }
            }
        }
    }

    #[test]
    fn prop_session_range_never_shrinks(seed in any::<u64>(), ticks in 1usize..300) {
        let mut sim = simulator(seed, 0.5);
        let mut prev = sim.snapshot();
        for _ in 0..ticks {
            let Some(next) = sim.tick() else { continue };
            for (id, r) in &next {
                let before = prev.get(id.as_str()).unwrap();
                prop_assert!(r.high >= before.high, "{} high shrank", id);
                prop_assert!(r.low <= before.low, "{} low shrank", id);
                prop_assert_eq!(r.close, before.close);
            }
            prev = next;
        }
    }

    #[test]
    fn prop_spread_rule_is_pure(bid in 0.0001f64..500.0) {
        let spread = spread_for_bid(bid);
        prop_assert_eq!(spread, spread_for_bid(bid));
        prop_assert!([0.01, 0.001, 0.0001, 0.00003].contains(&spread));
    }
}
