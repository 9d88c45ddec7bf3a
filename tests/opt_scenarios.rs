//! Optimal-oracle scenario tests.
//!
//! Fixed traces with known optimal costs, checked against both the
//! exhaustive search and the min-cost-flow reduction.

use policylab::{make_items, Item, McfOpt, Opt, Trace};

/// The standard fixture pool: three cheap items, two mid, four expensive.
fn items() -> Vec<Item> {
    make_items(&[1, 1, 1, 2, 2, 50, 90, 100, 100])
}

fn trace_of(accesses: &[&Item]) -> Trace {
    accesses.iter().map(|&i| i.clone()).collect()
}

fn assert_optimal_cost(k: usize, trace: &Trace, expected: u64) {
    // Surfaces the oracle's arc dumps under RUST_LOG=debug.
    let _ = env_logger::builder().is_test(true).try_init();

    let opt = Opt::new(k).unwrap();
    let mcf = McfOpt::new(k).unwrap();
    assert_eq!(opt.run(trace), expected, "Opt at k={k}");
    assert_eq!(mcf.run(trace), expected, "McfOpt at k={k}");
}

#[test]
fn test_single_access_pays_its_cost() {
    let items = items();
    assert_optimal_cost(1, &trace_of(&[&items[0]]), 1);
}

#[test]
fn test_two_distinct_items_both_miss() {
    let items = items();
    assert_optimal_cost(2, &trace_of(&[&items[0], &items[4]]), 3);
}

#[test]
fn test_repeat_within_capacity_is_a_hit() {
    let items = items();
    assert_optimal_cost(2, &trace_of(&[&items[0], &items[4], &items[4]]), 3);
}

#[test]
fn test_cold_misses_only() {
    let items = items();
    assert_optimal_cost(2, &trace_of(&[&items[0], &items[1], &items[2], &items[4]]), 5);
}

#[test]
fn test_retention_across_interleaving() {
    // A B A C A at k=2 (costs 1, 2, 3): both A repeats can be served
    // from cache, so only the three cold misses are paid.
    let items = make_items(&[1, 2, 3, 4]);
    let trace = trace_of(&[&items[0], &items[1], &items[0], &items[2], &items[0]]);
    assert_optimal_cost(2, &trace, 6);
}

#[test]
fn test_capacity_one_forces_every_alternation_to_miss() {
    let items = items();
    // A E A E at k=1: every access misses.
    let trace = trace_of(&[&items[0], &items[4], &items[0], &items[4]]);
    assert_optimal_cost(1, &trace, 6);
}

#[test]
fn test_retention_occupies_a_slot_at_intervening_accesses() {
    let items = items();
    // A B A at k=1: holding A across B would need a second slot, so
    // the repeat cannot be served from cache.
    let trace = trace_of(&[&items[0], &items[1], &items[0]]);
    assert_optimal_cost(1, &trace, 3);
}

#[test]
fn test_contention_retains_only_what_fits() {
    let items = items();
    // F(50) G(90) A(1) F G at k=2: retaining both F and G across A
    // would need three slots; the optimum holds only G and re-misses F.
    let trace = trace_of(&[&items[5], &items[6], &items[0], &items[5], &items[6]]);
    assert_optimal_cost(2, &trace, 191);
}

#[test]
fn test_expensive_item_is_kept_over_cheap_ones() {
    // G(90) A(1) B(1) G at k=2: the optimum holds G across the cheap
    // traffic, evicting A for B, and pays only the three cold misses.
    let items = items();
    let trace = trace_of(&[&items[6], &items[0], &items[1], &items[6]]);
    assert_optimal_cost(2, &trace, 92);
}

#[test]
fn test_empty_trace_costs_nothing() {
    assert_optimal_cost(3, &Trace::default(), 0);
}

#[test]
fn test_oracles_reject_zero_capacity() {
    assert!(Opt::new(0).is_err());
    assert!(McfOpt::new(0).is_err());
}

#[test]
fn test_oracles_agree_on_longer_mixed_trace() {
    let items = items();
    let trace = trace_of(&[
        &items[5], &items[0], &items[1], &items[5], &items[2], &items[0], &items[5], &items[1],
        &items[0], &items[5],
    ]);

    for k in 1..=4 {
        let opt = Opt::new(k).unwrap().run(&trace);
        let mcf = McfOpt::new(k).unwrap().run(&trace);
        assert_eq!(opt, mcf, "oracles disagree at k={k}");
    }
}
