//! Competitive-ratio and stack-algorithm checks.
//!
//! These comparisons are what the workbench exists for: replaying a trace
//! through an online policy and the offline optimum, and through the same
//! policy at adjacent capacities. They live in the library so property
//! tests and external harnesses share one definition of each check.

use log::debug;

use crate::common::{Error, Result, Trace};
use crate::opt::Opt;
use crate::policy::{Policy, PolicyKind, ReplacementPolicy};

/// The online policy's cost at capacity `k` divided by the offline
/// optimum at capacity `h`, or `None` when the offline cost is zero.
///
/// # Errors
/// Returns [`Error::InvalidCapacity`] if either capacity is zero.
pub fn competitive_ratio(
    kind: PolicyKind,
    k: usize,
    h: usize,
    trace: &Trace,
) -> Result<Option<f64>> {
    let mut online = Policy::new(kind, k)?;
    let offline = Opt::new(h)?;

    let online_cost = online.run(trace);
    let offline_cost = offline.run(trace);
    debug!("{kind:?} k={k} h={h}: online {online_cost}, offline {offline_cost}");

    if offline_cost == 0 {
        return Ok(None);
    }
    Ok(Some(online_cost as f64 / offline_cost as f64))
}

/// Whether the policy meets the `k / (k - h + 1)` competitive bound on
/// this trace.
///
/// When the offline optimum is zero the bound degenerates to requiring a
/// zero online cost.
///
/// # Errors
/// Returns [`Error::CapacityOrder`] if `h > k`, and
/// [`Error::InvalidCapacity`] if either capacity is zero.
pub fn meets_competitive_bound(kind: PolicyKind, k: usize, h: usize, trace: &Trace) -> Result<bool> {
    if h > k {
        return Err(Error::CapacityOrder { k, h });
    }

    let bound = k as f64 / (k - h + 1) as f64;
    match competitive_ratio(kind, k, h, trace)? {
        Some(ratio) => Ok(ratio <= bound),
        None => {
            let mut online = Policy::new(kind, k)?;
            Ok(online.run(trace) == 0)
        }
    }
}

/// Whether the policy behaves as a stack algorithm at capacity `k` on
/// this trace: the resident set after a full replay at `k` must nest
/// inside the resident set at `k + 1`.
///
/// # Errors
/// Returns [`Error::InvalidCapacity`] if `k` is zero.
pub fn is_stack_algorithm_at(kind: PolicyKind, k: usize, trace: &Trace) -> Result<bool> {
    let mut small = Policy::new(kind, k)?;
    let mut large = Policy::new(kind, k + 1)?;

    let _ = small.run(trace);
    let _ = large.run(trace);

    Ok(small.resident_set().is_subset(large.resident_set()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{make_items, Item};

    fn trace_of(items: &[Item]) -> Trace {
        Trace::new(items.to_vec())
    }

    #[test]
    fn test_ratio_of_matching_costs_is_one() {
        let items = make_items(&[1, 1]);
        let trace = trace_of(&[items[0].clone(), items[1].clone()]);
        let ratio = competitive_ratio(PolicyKind::Lru, 2, 2, &trace).unwrap();
        assert_eq!(ratio, Some(1.0));
    }

    #[test]
    fn test_ratio_none_when_offline_free() {
        // Free items cost nothing to miss, so the offline optimum is
        // zero and the ratio is undefined.
        let free = Item::with_cost("Z", 0);
        let trace = trace_of(&[free.clone(), free]);
        let ratio = competitive_ratio(PolicyKind::Lru, 1, 1, &trace).unwrap();
        assert_eq!(ratio, None);

        assert!(meets_competitive_bound(PolicyKind::Lru, 1, 1, &trace).unwrap());
    }

    #[test]
    fn test_lru_meets_bound_on_cycling() {
        // The classic LRU worst case: cycling k+1 items.
        let items = make_items(&[1, 1, 1]);
        let mut accesses = Vec::new();
        for _ in 0..4 {
            accesses.extend(items.iter().cloned());
        }
        let trace = Trace::new(accesses);

        assert!(meets_competitive_bound(PolicyKind::Lru, 2, 2, &trace).unwrap());
    }

    #[test]
    fn test_capacity_order_rejected() {
        let items = make_items(&[1]);
        let trace = trace_of(&items);
        assert_eq!(
            meets_competitive_bound(PolicyKind::Lru, 1, 2, &trace).unwrap_err(),
            Error::CapacityOrder { k: 1, h: 2 }
        );
    }

    #[test]
    fn test_lru_nesting_on_fixed_trace() {
        let items = make_items(&[1, 1, 1, 1]);
        let trace = trace_of(&[
            items[0].clone(),
            items[1].clone(),
            items[2].clone(),
            items[0].clone(),
            items[3].clone(),
        ]);
        for k in 1..=4 {
            assert!(is_stack_algorithm_at(PolicyKind::Lru, k, &trace).unwrap());
        }
    }

    #[test]
    fn test_priority_landlord_unique_nesting_on_fixed_trace() {
        let items = make_items(&[1, 1, 2, 50]);
        let trace = trace_of(&[
            items[0].clone(),
            items[3].clone(),
            items[1].clone(),
            items[3].clone(),
            items[2].clone(),
        ]);
        for k in 1..=4 {
            assert!(
                is_stack_algorithm_at(PolicyKind::PriorityLandlordUnique, k, &trace).unwrap(),
                "nesting failed at k={k}"
            );
        }
    }
}
