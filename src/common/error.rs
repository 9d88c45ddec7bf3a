//! Error types for policylab.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in policylab.
///
/// The core has no I/O, so every variant is a configuration error caught
/// at construction time. Invariant violations (an overfull resident set,
/// an infeasible flow network) are defects and abort via `assert!` instead
/// of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A policy or oracle was constructed with a capacity of zero.
    ///
    /// Every replacement policy needs at least one slot; a zero-capacity
    /// cache can never admit the item it is asked to serve.
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    /// A competitive-ratio check was asked to compare an online policy at
    /// capacity `k` against the offline optimum at a larger capacity `h`.
    ///
    /// The `k / (k - h + 1)` bound is only defined for `h <= k`.
    #[error("offline capacity {h} must not exceed online capacity {k}")]
    CapacityOrder { k: usize, h: usize },
}
