//! Optimal cost via minimum-cost flow.

use std::collections::HashMap;

use log::debug;

use crate::common::{Error, Item, Result, Trace};
use crate::opt::flow::{FlowStatus, MinCostFlow};

/// The optimal total cost computed through a flow reduction.
///
/// Each access is split into an in-node and an out-node. A repeated item
/// contributes a *retention* arc from its previous access's out-node to
/// the current access's in-node with capacity 1 and cost `-cost(item)`:
/// one unit of flow along it keeps a cache slot occupied by the item
/// across that interval and saves one miss. Consecutive accesses are
/// joined by *chain* arcs of capacity `k` (slots idling forward in
/// time), and each in-node connects to its out-node with one mandatory
/// unit plus `k - 1` of optional capacity. The mandatory unit is the
/// accessed item's own slot, so at most `k - 1` other items can be
/// retained *across* any access. `k` units enter at the first access
/// and leave at the last.
///
/// The answer is the all-miss total plus the (non-positive) optimal flow
/// cost. Equivalent to [`crate::Opt`] and polynomial, so it scales to
/// traces the exhaustive search cannot touch.
#[derive(Debug, Clone)]
pub struct McfOpt {
    capacity: usize,
}

impl McfOpt {
    /// Create a flow-based oracle for capacity `k`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidCapacity(k));
        }
        Ok(McfOpt { capacity: k })
    }

    /// The configured capacity `k`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compute the optimal total cost for `trace`.
    ///
    /// # Panics
    /// Panics if the constructed network has no optimal feasible flow.
    /// The chain and through arcs make the network feasible by
    /// construction, so a failed solve is a defect in the reduction, not
    /// a user condition.
    pub fn run(&self, trace: &Trace) -> u64 {
        let n = trace.len();
        let total = trace.total_cost();
        if n == 0 {
            return 0;
        }

        let k = self.capacity as i64;
        // Access t is split into in-node 2t and out-node 2t + 1.
        let node_in = |t: usize| 2 * t;
        let node_out = |t: usize| 2 * t + 1;

        let mut network = MinCostFlow::new(2 * n);
        let mut last_access: HashMap<&Item, usize> = HashMap::new();
        let mut retention_arcs = 0usize;

        for (node, item) in trace.iter().enumerate() {
            if let Some(&previous) = last_access.get(item) {
                debug!(
                    "retention arc {previous} -> {node} (item {item}, saving {})",
                    item.cost
                );
                network.add_arc(node_out(previous), node_in(node), 1, -(item.cost as i64));
                retention_arcs += 1;
            }
            let _ = last_access.insert(item, node);
        }

        // No repeated item means no hit to schedule: every access misses.
        if retention_arcs == 0 {
            return total;
        }

        for t in 0..n {
            // The accessed item always holds one slot of its own. That
            // mandatory unit is expressed as a demand at the in-node and
            // a supply at the out-node; the through arc carries only the
            // optional remainder.
            if k > 1 {
                network.add_arc(node_in(t), node_out(t), k - 1, 0);
            }
            if t + 1 < n {
                network.add_arc(node_out(t), node_in(t + 1), k, 0);
            }

            let mut supply_in: i64 = -1;
            let mut supply_out: i64 = 1;
            if t == 0 {
                supply_in += k;
            }
            if t == n - 1 {
                supply_out -= k;
            }
            network.set_supply(node_in(t), supply_in);
            network.set_supply(node_out(t), supply_out);
        }

        debug!("solving: {n} accesses, {retention_arcs} retention arcs, supply {k}");

        let status = network.solve();
        assert_eq!(
            status,
            FlowStatus::Optimal,
            "min-cost-flow reduction produced an unsolvable network"
        );

        // The flow cost is the (negative) total savings from optimally
        // scheduled hits.
        let answer = total as i64 + network.total_cost();
        assert!(answer >= 0, "flow savings exceed the all-miss total");
        answer as u64
    }
}
