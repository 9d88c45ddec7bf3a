//! The Priority-Landlord family: priority decay tied to recency.
//!
//! Same mechanics as the Landlord family, but the decay amount is the
//! incoming item's initial priority (its cost) and the decay is
//! unconditional, so priorities go negative. The two variants differ in
//! decay *scope*:
//!
//! - [`PriorityLandlord`] penalizes every resident on every access.
//! - [`PriorityLandlordUnique`] penalizes only the residents accessed
//!   since the incoming item's previous visit.
//!
//! Both exist to hunt competitive-ratio counterexamples; the unique
//! variant is the one checked against the `k / (k - h + 1)` bound and the
//! stack-algorithm nesting property.

use std::collections::{HashMap, HashSet};

use crate::common::{Item, Result};
use crate::policy::state::{CacheState, RecencyStack};
use crate::policy::ReplacementPolicy;

/// Select the eviction victim: minimum priority, ties broken by least
/// recent position in the stack.
fn min_priority_victim(priorities: &HashMap<Item, i64>, recency: &RecencyStack) -> Option<Item> {
    priorities
        .iter()
        .min_by_key(|&(item, priority)| (*priority, recency.position(item)))
        .map(|(item, _)| item.clone())
}

/// Priority landlord with unscoped decay.
///
/// Every access decrements every resident's priority by the incoming
/// item's cost, then refreshes the accessed item to its full cost.
#[derive(Debug, Clone)]
pub struct PriorityLandlord {
    state: CacheState,
    priorities: HashMap<Item, i64>,
    recency: RecencyStack,
}

impl PriorityLandlord {
    /// Create a priority landlord cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(PriorityLandlord {
            state: CacheState::new(k)?,
            priorities: HashMap::new(),
            recency: RecencyStack::new(),
        })
    }

    fn initial_priority(item: &Item) -> i64 {
        item.cost as i64
    }
}

impl ReplacementPolicy for PriorityLandlord {
    fn access(&mut self, item: &Item) -> bool {
        let hit = self.state.contains(item);
        let initial = Self::initial_priority(item);

        let _ = self.recency.touch(item);

        for priority in self.priorities.values_mut() {
            *priority -= initial;
        }

        if !hit && self.state.would_overflow() {
            if let Some(victim) = min_priority_victim(&self.priorities, &self.recency) {
                let _ = self.state.remove(&victim);
                let _ = self.priorities.remove(&victim);
            }
        }

        self.state.insert(item.clone());
        let _ = self.priorities.insert(item.clone(), initial);

        self.state.assert_within_capacity();
        hit
    }

    fn resident_set(&self) -> &HashSet<Item> {
        self.state.set()
    }

    fn capacity(&self) -> usize {
        self.state.capacity()
    }
}

/// Priority landlord with decay scoped to the incoming item's last visit.
///
/// Before relocating the accessed item to most-recent, its previous stack
/// position is recorded; only residents sitting *above* that position in
/// the relocated stack are penalized. Items untouched since the previous
/// visit keep their priority. An item never seen before penalizes
/// everything, like [`PriorityLandlord`].
#[derive(Debug, Clone)]
pub struct PriorityLandlordUnique {
    state: CacheState,
    priorities: HashMap<Item, i64>,
    recency: RecencyStack,
}

impl PriorityLandlordUnique {
    /// Create a unique-decay priority landlord cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(PriorityLandlordUnique {
            state: CacheState::new(k)?,
            priorities: HashMap::new(),
            recency: RecencyStack::new(),
        })
    }

    fn initial_priority(item: &Item) -> i64 {
        item.cost as i64
    }
}

impl ReplacementPolicy for PriorityLandlordUnique {
    fn access(&mut self, item: &Item) -> bool {
        let hit = self.state.contains(item);
        let initial = Self::initial_priority(item);

        // Position before the move scopes the decay; positions are
        // measured in the relocated stack, which retains evicted items.
        let previous = self.recency.touch(item);

        for (resident, priority) in self.priorities.iter_mut() {
            let in_scope = match previous {
                None => true,
                Some(p) => self.recency.position(resident) > Some(p),
            };
            if in_scope {
                *priority -= initial;
            }
        }

        if !hit && self.state.would_overflow() {
            if let Some(victim) = min_priority_victim(&self.priorities, &self.recency) {
                let _ = self.state.remove(&victim);
                let _ = self.priorities.remove(&victim);
            }
        }

        self.state.insert(item.clone());
        let _ = self.priorities.insert(item.clone(), initial);

        self.state.assert_within_capacity();
        hit
    }

    fn resident_set(&self) -> &HashSet<Item> {
        self.state.set()
    }

    fn capacity(&self) -> usize {
        self.state.capacity()
    }
}
