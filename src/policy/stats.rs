//! Per-run access statistics.

use std::fmt;

/// Statistics accumulated over one trace replay.
///
/// Plain counters, not atomics: every policy instance is exclusively
/// owned, so nothing here is shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Accesses that found the item already resident.
    pub hits: u64,

    /// Accesses that had to admit the item.
    pub misses: u64,

    /// Total miss cost paid.
    pub cost: u64,
}

impl RunStats {
    /// Record one access verdict.
    pub fn record(&mut self, hit: bool, cost: u64) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.cost += cost;
        }
    }

    /// Total number of accesses recorded.
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate in `[0.0, 1.0]`; zero for an empty run.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} cost={} ({:.1}% hit rate)",
            self.hits,
            self.misses,
            self.cost,
            self.hit_rate() * 100.0
        )
    }
}
