//! Recency-stack policies: LRU and MRU.
//!
//! Both keep a recency-ordered queue of resident items (front = least
//! recent, back = most recent) and differ only in which end they evict
//! from on overflow.

use std::collections::{HashSet, VecDeque};

use crate::common::{Item, Result};
use crate::policy::state::CacheState;
use crate::policy::ReplacementPolicy;

/// Least-recently-used replacement.
///
/// On overflow, evicts the single item at the least-recent end. Exactly
/// one eviction per miss (unit sizes).
#[derive(Debug, Clone)]
pub struct Lru {
    state: CacheState,
    order: VecDeque<Item>,
}

impl Lru {
    /// Create an LRU cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(Lru {
            state: CacheState::new(k)?,
            order: VecDeque::new(),
        })
    }
}

impl ReplacementPolicy for Lru {
    fn access(&mut self, item: &Item) -> bool {
        let hit = self.state.contains(item);

        if let Some(p) = self.order.iter().position(|i| i == item) {
            let _ = self.order.remove(p);
        }
        self.order.push_back(item.clone());
        self.state.insert(item.clone());

        if self.state.overfull() {
            if let Some(victim) = self.order.pop_front() {
                let _ = self.state.remove(&victim);
            }
        }

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

/// Most-recently-used replacement.
///
/// On overflow, evicts the item at the most-recent end *before* the
/// incoming item takes that position: the victim is whatever was most
/// recent prior to this access, never the incoming item itself.
#[derive(Debug, Clone)]
pub struct Mru {
    state: CacheState,
    order: VecDeque<Item>,
}

impl Mru {
    /// Create an MRU cache with capacity `k`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        Ok(Mru {
            state: CacheState::new(k)?,
            order: VecDeque::new(),
        })
    }
}

impl ReplacementPolicy for Mru {
    fn access(&mut self, item: &Item) -> bool {
        let hit = self.state.contains(item);

        if let Some(p) = self.order.iter().position(|i| i == item) {
            let _ = self.order.remove(p);
        }
        self.state.insert(item.clone());

        if self.state.overfull() {
            if let Some(victim) = self.order.pop_back() {
                let _ = self.state.remove(&victim);
            }
        }
        self.order.push_back(item.clone());

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
