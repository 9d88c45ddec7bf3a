//! Cache items.

use std::fmt;

/// An immutable cache item.
///
/// Equality and hashing are by value over all three fields, so an `Item`
/// can serve directly as the key of a resident set or a credit map. Two
/// items with the same name are the same cache entry (fixtures never reuse
/// a name with a different cost or size).
///
/// # Example
/// ```
/// use policylab::Item;
///
/// let a = Item::with_cost("A", 3);
/// assert_eq!(a.cost, 3);
/// assert_eq!(a.size, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique identifier of the cache entry.
    pub name: String,

    /// Cost paid whenever an access to this item misses.
    pub cost: u64,

    /// Capacity units the item consumes while resident.
    ///
    /// The policies in this crate assume unit sizes; the field is carried
    /// so traces keep the full weighted-caching shape.
    pub size: u32,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, cost: u64, size: u32) -> Self {
        Item {
            name: name.into(),
            cost,
            size,
        }
    }

    /// Create a new item with unit size.
    pub fn with_cost(name: impl Into<String>, cost: u64) -> Self {
        Item::new(name, cost, 1)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Make unit-size items with the given costs, named `A, B, C, …` in order.
///
/// Fixture helper for tests and harnesses; supports up to 26 items.
pub fn make_items(costs: &[u64]) -> Vec<Item> {
    assert!(costs.len() <= 26, "make_items names run A..Z");
    costs
        .iter()
        .enumerate()
        .map(|(i, &cost)| Item::with_cost(((b'A' + i as u8) as char).to_string(), cost))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_with_cost_is_unit_size() {
        let item = Item::with_cost("X", 7);
        assert_eq!(item.size, 1);
        assert_eq!(item.cost, 7);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Item::with_cost("A", 1), Item::with_cost("A", 1));
        assert_ne!(Item::with_cost("A", 1), Item::with_cost("A", 2));
        assert_ne!(Item::with_cost("A", 1), Item::with_cost("B", 1));
    }

    #[test]
    fn test_make_items_names_and_costs() {
        let items = make_items(&[1, 2, 50]);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "A");
        assert_eq!(items[1].name, "B");
        assert_eq!(items[2].name, "C");
        assert_eq!(items[2].cost, 50);
        assert!(items.iter().all(|i| i.size == 1));
    }

    #[test]
    fn test_set_membership() {
        let items = make_items(&[1, 2]);
        let set: HashSet<Item> = items.iter().cloned().collect();
        assert!(set.contains(&Item::with_cost("A", 1)));
        assert!(!set.contains(&Item::with_cost("A", 2)));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(format!("{}", Item::with_cost("E", 9)), "E");
    }
}
