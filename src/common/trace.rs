//! Access traces.

use std::ops::Index;
use std::slice;

use crate::common::Item;

/// A finite, ordered sequence of cache accesses.
///
/// Accesses occur in index order and repeats are meaningful (they are
/// what create hits). A trace is immutable once built; replaying it is a
/// single forward pass, and iterating by reference starts a fresh
/// traversal each time, so any number of independent policy instances can
/// replay the same trace.
///
/// # Example
/// ```
/// use policylab::{make_items, Trace};
///
/// let items = make_items(&[1, 2]);
/// let trace = Trace::new(vec![items[0].clone(), items[1].clone(), items[0].clone()]);
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace[2].name, "A");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    accesses: Vec<Item>,
}

impl Trace {
    /// Create a trace from an ordered list of accesses.
    pub fn new(accesses: Vec<Item>) -> Self {
        Trace { accesses }
    }

    /// Number of accesses in the trace.
    pub fn len(&self) -> usize {
        self.accesses.len()
    }

    /// Whether the trace contains no accesses.
    pub fn is_empty(&self) -> bool {
        self.accesses.is_empty()
    }

    /// The access at index `i`, if any.
    pub fn get(&self, i: usize) -> Option<&Item> {
        self.accesses.get(i)
    }

    /// Iterate over the accesses in order.
    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.accesses.iter()
    }

    /// Total cost if every access were a miss.
    pub fn total_cost(&self) -> u64 {
        self.accesses.iter().map(|item| item.cost).sum()
    }
}

impl Index<usize> for Trace {
    type Output = Item;

    fn index(&self, i: usize) -> &Item {
        &self.accesses[i]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.accesses.iter()
    }
}

impl From<Vec<Item>> for Trace {
    fn from(accesses: Vec<Item>) -> Self {
        Trace::new(accesses)
    }
}

impl FromIterator<Item> for Trace {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Trace::new(iter.into_iter().collect())
    }
}
