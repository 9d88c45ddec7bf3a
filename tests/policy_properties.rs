//! Property tests over randomized traces.
//!
//! Traces draw from a fixed item pool (three cheap, two mid, four
//! expensive items) and stay short enough that the exhaustive oracle is
//! cheap, since half of these properties compare against it.

use proptest::prelude::*;

use policylab::analysis::{is_stack_algorithm_at, meets_competitive_bound};
use policylab::{make_items, McfOpt, Opt, Policy, PolicyKind, ReplacementPolicy, Trace};

fn item_pool() -> Vec<policylab::Item> {
    make_items(&[1, 1, 1, 2, 2, 50, 90, 100, 100])
}

fn traces(max_len: usize) -> impl Strategy<Value = Trace> {
    prop::collection::vec(prop::sample::select(item_pool()), 1..=max_len)
        .prop_map(Trace::new)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn resident_set_never_exceeds_capacity(trace in traces(20), k in 1usize..=4) {
        for kind in PolicyKind::ALL {
            let mut policy = Policy::new(kind, k).unwrap();
            for item in &trace {
                let _ = policy.access(item);
                prop_assert!(
                    policy.resident_set().len() <= k,
                    "{kind:?} overfull at k={k}"
                );
            }
        }
    }

    #[test]
    fn run_cost_is_bounded(trace in traces(20), k in 1usize..=4) {
        let ceiling = trace.total_cost();
        for kind in PolicyKind::ALL {
            let mut policy = Policy::new(kind, k).unwrap();
            let cost = policy.run(&trace);
            prop_assert!(cost <= ceiling, "{kind:?} paid {cost} > {ceiling}");
        }
    }

    #[test]
    fn run_stats_reconcile(trace in traces(20), k in 1usize..=4) {
        for kind in PolicyKind::ALL {
            let mut policy = Policy::new(kind, k).unwrap();
            let stats = policy.run_stats(&trace);
            prop_assert_eq!(stats.accesses(), trace.len() as u64);
        }
    }

    #[test]
    fn exhaustive_and_flow_optima_agree(trace in traces(12), k in 1usize..=4) {
        let opt = Opt::new(k).unwrap().run(&trace);
        let mcf = McfOpt::new(k).unwrap().run(&trace);
        prop_assert_eq!(opt, mcf);
    }

    #[test]
    fn online_cost_dominates_offline_optimum(trace in traces(12), k in 1usize..=4) {
        let offline = Opt::new(k).unwrap().run(&trace);
        for kind in PolicyKind::ALL {
            let mut policy = Policy::new(kind, k).unwrap();
            let online = policy.run(&trace);
            prop_assert!(
                online >= offline,
                "{kind:?} beat the optimum: {online} < {offline}"
            );
        }
    }

    #[test]
    fn lru_is_a_stack_algorithm(trace in traces(15), k in 1usize..=4) {
        prop_assert!(is_stack_algorithm_at(PolicyKind::Lru, k, &trace).unwrap());
    }

    #[test]
    fn priority_landlord_unique_is_a_stack_algorithm(trace in traces(15), k in 1usize..=4) {
        prop_assert!(
            is_stack_algorithm_at(PolicyKind::PriorityLandlordUnique, k, &trace).unwrap()
        );
    }

    #[test]
    fn priority_landlord_unique_meets_competitive_bound(
        trace in traces(12),
        k in 1usize..=4,
        h in 1usize..=4,
    ) {
        prop_assume!(h <= k);
        prop_assert!(
            meets_competitive_bound(PolicyKind::PriorityLandlordUnique, k, h, &trace).unwrap()
        );
    }
}
