//! Exhaustive optimal-cost search.

use std::collections::HashMap;

use crate::common::{Error, Item, Result, Trace};

/// A pending decision point in the search.
///
/// Each frame records exactly the mutations applied on entry so the
/// unwind step can undo them: the item admitted at this position (if the
/// access missed) and the eviction currently applied (if admission
/// overflowed). Every exit path through the frame restores both.
#[derive(Debug)]
struct Frame {
    pos: usize,
    /// Miss cost paid at this position, zero on a hit.
    paid: u64,
    /// Item index admitted here, to be un-admitted on exit.
    admitted: Option<usize>,
    /// Eviction choices not yet explored.
    victims: Vec<usize>,
    /// The eviction currently applied, restored before the next choice.
    evicted: Option<usize>,
    /// Minimum cost over the completed eviction branches.
    best: Option<u64>,
}

/// The minimum total miss cost achievable by any eviction policy with
/// full knowledge of the trace, for capacity `k`.
///
/// Branch-and-restore over every eviction choice at every overflowing
/// miss. Exponential in the number of branch points; intended as ground
/// truth for small validation traces, with [`crate::McfOpt`] as the
/// tractable equivalent.
#[derive(Debug, Clone)]
pub struct Opt {
    capacity: usize,
}

impl Opt {
    /// Create an exhaustive oracle for capacity `k`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidCapacity(k));
        }
        Ok(Opt { capacity: k })
    }

    /// The configured capacity `k`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Compute the optimal total cost for `trace`.
    ///
    /// The search runs on an explicit frame stack over interned item
    /// indices, so trace length never translates into call-stack depth
    /// and every undo is a visible operation.
    pub fn run(&self, trace: &Trace) -> u64 {
        let n = trace.len();
        if n == 0 {
            return 0;
        }

        // Intern items: the resident set becomes index-addressed flags.
        let mut ids: HashMap<&Item, usize> = HashMap::new();
        let mut costs: Vec<u64> = Vec::new();
        let accesses: Vec<usize> = trace
            .iter()
            .map(|item| {
                *ids.entry(item).or_insert_with(|| {
                    costs.push(item.cost);
                    costs.len() - 1
                })
            })
            .collect();

        let mut resident = vec![false; costs.len()];
        let mut count: usize = 0;
        let mut stack: Vec<Frame> = Vec::new();
        let mut pos = 0usize;

        loop {
            // Descend: apply accesses until the end of the trace.
            while pos < n {
                let id = accesses[pos];
                if resident[id] {
                    stack.push(Frame {
                        pos,
                        paid: 0,
                        admitted: None,
                        victims: Vec::new(),
                        evicted: None,
                        best: None,
                    });
                    pos += 1;
                    continue;
                }

                let paid = costs[id];
                resident[id] = true;
                count += 1;

                let mut frame = Frame {
                    pos,
                    paid,
                    admitted: Some(id),
                    victims: Vec::new(),
                    evicted: None,
                    best: None,
                };
                if count > self.capacity {
                    // Overflow: branch over evicting each other resident.
                    frame.victims = (0..resident.len())
                        .filter(|&j| resident[j] && j != id)
                        .collect();
                    if let Some(victim) = frame.victims.pop() {
                        resident[victim] = false;
                        count -= 1;
                        frame.evicted = Some(victim);
                    }
                }
                stack.push(frame);
                pos += 1;
            }

            // End of trace: a completed branch contributes zero.
            let mut ret: u64 = 0;

            // Unwind: fold branch results upward, restoring state. Stops
            // to descend again whenever a frame has another eviction
            // choice to try.
            let done = loop {
                let Some(frame) = stack.last_mut() else {
                    break Some(ret);
                };

                match frame.evicted.take() {
                    Some(victim) => {
                        let best = frame.best.map_or(ret, |b| b.min(ret));
                        resident[victim] = true;
                        count += 1;

                        if let Some(next) = frame.victims.pop() {
                            frame.best = Some(best);
                            resident[next] = false;
                            count -= 1;
                            frame.evicted = Some(next);
                            pos = frame.pos + 1;
                            break None;
                        }
                        ret = frame.paid + best;
                    }
                    None => ret += frame.paid,
                }

                if let Some(id) = frame.admitted {
                    resident[id] = false;
                    count -= 1;
                }
                let _ = stack.pop();
            };

            if let Some(total) = done {
                return total;
            }
        }
    }
}
