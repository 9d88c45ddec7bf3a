//! The Landlord family: credit-based eviction for weighted costs.
//!
//! Every resident item carries a credit, initialized to its cost on
//! admission. Credits decay by the minimum resident credit and items at
//! zero credit become eviction candidates. The two variants differ in
//! *when* decay happens and *how many* zero-credit items are evicted:
//!
//! - [`EagerLandlord`] decays on every access and evicts exactly one
//!   victim, the least recently used among the zero-credit items.
//! - [`Landlord`] (the forced cost model) decays only when a miss
//!   requires an eviction, and then evicts every zero-credit item.
//!
//! The asymmetry is deliberate: the two variants validate different
//! proven cost bounds and must not be unified.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::common::{Item, Result};
use crate::policy::state::{CacheState, RecencyStack};
use crate::policy::ReplacementPolicy;

/// Young's landlord algorithm under the eager (optional) cost model.
///
/// Decays credits on *every* access, hit or miss, then refreshes the
/// accessed item's credit to its full cost.
#[derive(Debug, Clone)]
pub struct EagerLandlord {
    state: CacheState,
    credits: HashMap<Item, i64>,
    recency: RecencyStack,
}

impl EagerLandlord {
    /// Create an eager landlord cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(EagerLandlord {
            state: CacheState::new(k)?,
            credits: HashMap::new(),
            recency: RecencyStack::new(),
        })
    }

    fn initial_credit(item: &Item) -> i64 {
        item.cost as i64
    }

    /// Minimum credit over the resident set, zero when empty.
    fn delta(&self) -> i64 {
        self.credits.values().min().copied().unwrap_or(0)
    }

    /// The least-recently-used resident with zero credit.
    ///
    /// After a decay step there is always at least one, because the decay
    /// amount is the resident minimum.
    fn victim(&self) -> Option<Item> {
        let candidates = self
            .state
            .set()
            .iter()
            .filter(|i| self.credits.get(*i) == Some(&0));
        self.recency.least_recent(candidates).cloned()
    }
}

impl ReplacementPolicy for EagerLandlord {
    fn access(&mut self, item: &Item) -> bool {
        let delta = self.delta();
        for credit in self.credits.values_mut() {
            *credit -= delta;
        }

        let hit = self.state.contains(item);
        let _ = self.recency.touch(item);

        if !hit && self.state.would_overflow() {
            if let Some(victim) = self.victim() {
                trace!("eager landlord evicting {victim}");
                let _ = self.state.remove(&victim);
                let _ = self.credits.remove(&victim);
            }
        }

        self.state.insert(item.clone());
        let _ = self.credits.insert(item.clone(), Self::initial_credit(item));

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

/// Young's landlord algorithm under the forced cost model.
///
/// Credits decay only when a miss requires an eviction; the decay step
/// then evicts *every* item whose credit reached zero, possibly more
/// than one.
#[derive(Debug, Clone)]
pub struct Landlord {
    state: CacheState,
    credits: HashMap<Item, i64>,
}

impl Landlord {
    /// Create a forced-model landlord cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(Landlord {
            state: CacheState::new(k)?,
            credits: HashMap::new(),
        })
    }

    fn initial_credit(item: &Item) -> i64 {
        item.cost as i64
    }
}

impl ReplacementPolicy for Landlord {
    fn access(&mut self, item: &Item) -> bool {
        let hit = self.state.contains(item);

        if !hit && self.state.would_overflow() {
            let delta = self.credits.values().min().copied().unwrap_or(0);
            for credit in self.credits.values_mut() {
                *credit -= delta;
            }

            let victims: Vec<Item> = self
                .state
                .set()
                .iter()
                .filter(|i| self.credits.get(*i) == Some(&0))
                .cloned()
                .collect();
            for victim in &victims {
                trace!("landlord evicting {victim}");
                let _ = self.state.remove(victim);
                let _ = self.credits.remove(victim);
            }
        }

        self.state.insert(item.clone());
        let _ = self.credits.insert(item.clone(), Self::initial_credit(item));

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
