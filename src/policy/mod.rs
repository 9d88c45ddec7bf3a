//! Replacement policies.
//!
//! # Components
//! - [`ReplacementPolicy`] - The common access/run/resident-set contract
//! - [`Policy`] / [`PolicyKind`] - Closed tagged-variant dispatch for
//!   comparison harnesses
//! - [`Lru`] / [`Mru`] - Recency-stack policies
//! - [`EagerLandlord`] / [`Landlord`] - Credit-based fractional eviction
//! - [`PriorityLandlord`] / [`PriorityLandlordUnique`] - Priority-decay
//!   variants
//! - [`RunStats`] - Hit/miss/cost accounting for one replay

mod landlord;
mod lru;
mod priority;
pub(crate) mod state;
mod stats;

pub use landlord::{EagerLandlord, Landlord};
pub use lru::{Lru, Mru};
pub use priority::{PriorityLandlord, PriorityLandlordUnique};
pub use stats::RunStats;

use std::collections::HashSet;

use crate::common::{Item, Result, Trace};

/// The contract every replacement policy implements.
///
/// `access` is the single state transition: it reads and possibly evicts
/// from the resident set, admits the item, and reports whether the item
/// was resident *before* this call mutated anything. It must never leave
/// the resident set overfull.
pub trait ReplacementPolicy {
    /// Access one item, returning whether it hit.
    fn access(&mut self, item: &Item) -> bool;

    /// Read-only view of the current cache contents.
    fn resident_set(&self) -> &HashSet<Item>;

    /// The configured capacity `k`.
    fn capacity(&self) -> usize;

    /// Replay a trace, returning the total miss cost paid.
    fn run(&mut self, trace: &Trace) -> u64 {
        self.run_stats(trace).cost
    }

    /// Replay a trace, returning full hit/miss/cost accounting.
    fn run_stats(&mut self, trace: &Trace) -> RunStats {
        let mut stats = RunStats::default();
        for item in trace {
            let hit = self.access(item);
            stats.record(hit, item.cost);
        }
        stats
    }
}

/// The fixed set of policy variants, for harness construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Least recently used.
    Lru,
    /// Most recently used.
    Mru,
    /// Landlord, eager cost model.
    EagerLandlord,
    /// Landlord, forced cost model.
    Landlord,
    /// Priority landlord, unscoped decay.
    PriorityLandlord,
    /// Priority landlord, decay scoped to the item's last visit.
    PriorityLandlordUnique,
}

impl PolicyKind {
    /// Every variant, in a stable order, for exhaustive harness sweeps.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Lru,
        PolicyKind::Mru,
        PolicyKind::EagerLandlord,
        PolicyKind::Landlord,
        PolicyKind::PriorityLandlord,
        PolicyKind::PriorityLandlordUnique,
    ];
}

/// A policy selected at runtime.
///
/// The variant set is fixed and exhaustively enumerable, so dispatch is a
/// closed enum rather than trait objects.
#[derive(Debug, Clone)]
pub enum Policy {
    Lru(Lru),
    Mru(Mru),
    EagerLandlord(EagerLandlord),
    Landlord(Landlord),
    PriorityLandlord(PriorityLandlord),
    PriorityLandlordUnique(PriorityLandlordUnique),
}

impl Policy {
    /// Construct the policy variant `kind` with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(kind: PolicyKind, k: usize) -> Result<Self> {
        Ok(match kind {
            PolicyKind::Lru => Policy::Lru(Lru::new(k)?),
            PolicyKind::Mru => Policy::Mru(Mru::new(k)?),
            PolicyKind::EagerLandlord => Policy::EagerLandlord(EagerLandlord::new(k)?),
            PolicyKind::Landlord => Policy::Landlord(Landlord::new(k)?),
            PolicyKind::PriorityLandlord => Policy::PriorityLandlord(PriorityLandlord::new(k)?),
            PolicyKind::PriorityLandlordUnique => {
                Policy::PriorityLandlordUnique(PriorityLandlordUnique::new(k)?)
            }
        })
    }

    /// Which variant this policy is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Mru(_) => PolicyKind::Mru,
            Policy::EagerLandlord(_) => PolicyKind::EagerLandlord,
            Policy::Landlord(_) => PolicyKind::Landlord,
            Policy::PriorityLandlord(_) => PolicyKind::PriorityLandlord,
            Policy::PriorityLandlordUnique(_) => PolicyKind::PriorityLandlordUnique,
        }
    }
}

impl ReplacementPolicy for Policy {
    fn access(&mut self, item: &Item) -> bool {
        match self {
            Policy::Lru(p) => p.access(item),
            Policy::Mru(p) => p.access(item),
            Policy::EagerLandlord(p) => p.access(item),
            Policy::Landlord(p) => p.access(item),
            Policy::PriorityLandlord(p) => p.access(item),
            Policy::PriorityLandlordUnique(p) => p.access(item),
        }
    }

    fn resident_set(&self) -> &HashSet<Item> {
        match self {
            Policy::Lru(p) => p.resident_set(),
            Policy::Mru(p) => p.resident_set(),
            Policy::EagerLandlord(p) => p.resident_set(),
            Policy::Landlord(p) => p.resident_set(),
            Policy::PriorityLandlord(p) => p.resident_set(),
            Policy::PriorityLandlordUnique(p) => p.resident_set(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Policy::Lru(p) => p.capacity(),
            Policy::Mru(p) => p.capacity(),
            Policy::EagerLandlord(p) => p.capacity(),
            Policy::Landlord(p) => p.capacity(),
            Policy::PriorityLandlord(p) => p.capacity(),
            Policy::PriorityLandlordUnique(p) => p.capacity(),
        }
    }
}
