//! Shared bookkeeping owned by every policy instance.
//!
//! Policies compose these helpers instead of inheriting state:
//! [`CacheState`] holds the capacity and the resident set, and
//! [`RecencyStack`] tracks access recency for the policies that need it.

use std::collections::HashSet;

use crate::common::{Error, Item, Result};

/// The capacity and resident set every replacement policy owns.
///
/// The resident set is bounded by the capacity after every completed
/// access; [`CacheState::assert_within_capacity`] checks that invariant
/// and aborts on violation, since an overfull cache is a policy defect
/// and not a runtime condition.
#[derive(Debug, Clone)]
pub(crate) struct CacheState {
    capacity: usize,
    resident: HashSet<Item>,
}

impl CacheState {
    /// Create an empty cache state with capacity `k`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidCapacity(k));
        }
        Ok(CacheState {
            capacity: k,
            resident: HashSet::new(),
        })
    }

    /// Configured capacity in items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident items (unit sizes, so count = used capacity).
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Whether `item` is currently resident.
    pub fn contains(&self, item: &Item) -> bool {
        self.resident.contains(item)
    }

    /// Whether admitting one more item would exceed the capacity.
    pub fn would_overflow(&self) -> bool {
        self.len() + 1 > self.capacity
    }

    /// Whether the resident set currently exceeds the capacity.
    pub fn overfull(&self) -> bool {
        self.len() > self.capacity
    }

    /// Admit an item into the resident set.
    pub fn insert(&mut self, item: Item) {
        let _ = self.resident.insert(item);
    }

    /// Evict an item from the resident set, returning whether it was there.
    pub fn remove(&mut self, item: &Item) -> bool {
        self.resident.remove(item)
    }

    /// The resident set itself.
    pub fn set(&self) -> &HashSet<Item> {
        &self.resident
    }

    /// Abort if the resident set exceeds the capacity.
    ///
    /// Called by every policy at the end of `access`.
    pub fn assert_within_capacity(&self) {
        assert!(
            !self.overfull(),
            "resident set exceeds capacity: {} > {}",
            self.len(),
            self.capacity
        );
    }
}

/// An access-recency list, most recent at the back.
///
/// The list is the full access history ordered by last access: evicted
/// items stay at their last-access position. That retention is observable
/// in `PriorityLandlordUnique`, whose decay scope is measured by position
/// in this list, so removal on eviction would change which residents fall
/// inside the scope.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecencyStack {
    order: Vec<Item>,
}

impl RecencyStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        RecencyStack { order: Vec::new() }
    }

    /// Position of `item`, 0 = least recent.
    pub fn position(&self, item: &Item) -> Option<usize> {
        self.order.iter().position(|i| i == item)
    }

    /// Move `item` to the most-recent position, inserting it if absent.
    ///
    /// Returns the position the item held before the move.
    pub fn touch(&mut self, item: &Item) -> Option<usize> {
        let previous = self.position(item);
        if let Some(p) = previous {
            let _ = self.order.remove(p);
        }
        self.order.push(item.clone());
        previous
    }

    /// The least recently accessed of `candidates`.
    ///
    /// Candidates not present in the stack sort first; policies only pass
    /// resident items, which are always present.
    pub fn least_recent<'a, I>(&self, candidates: I) -> Option<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        candidates.into_iter().min_by_key(|i| self.position(i))
    }
}
