//! policylab - a workbench for weighted-cost cache replacement policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        policylab                          │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │          Analysis (analysis)                        │  │
//! │  │  competitive ratio · competitive bound · nesting    │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │              ↓                          ↓                 │
//! │  ┌───────────────────────┐  ┌───────────────────────────┐ │
//! │  │  Policies (policy/)   │  │  Optimal oracles (opt/)   │ │
//! │  │  LRU | MRU            │  │  Opt (exhaustive search)  │ │
//! │  │  Landlord (eager,     │  │  McfOpt (min-cost-flow    │ │
//! │  │    forced)            │  │    reduction + solver)    │ │
//! │  │  Priority-Landlord    │  │                           │ │
//! │  │    (plain, unique)    │  │                           │ │
//! │  └───────────────────────┘  └───────────────────────────┘ │
//! │              ↓                          ↓                 │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │          Common (common/)                           │  │
//! │  │          Item · Trace · Error                       │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! A trace is replayed item-by-item into one policy instance; each access
//! mutates the policy's state and yields a hit/miss verdict, and miss
//! costs accumulate into a total. The optimal oracles compute the same
//! total under an omniscient schedule, used as the baseline divisor for
//! competitive-ratio checks.
//!
//! # Modules
//! - [`common`] - Shared primitives (Item, Trace, Error)
//! - [`policy`] - The replacement policies and their shared contract
//! - [`opt`] - The exhaustive and flow-based optimal-cost oracles
//! - [`analysis`] - Competitive-ratio and stack-algorithm checks
//!
//! # Quick Start
//! ```
//! use policylab::{make_items, Lru, Opt, ReplacementPolicy, Trace};
//!
//! let items = make_items(&[1, 2, 2]);
//! let trace: Trace = vec![
//!     items[0].clone(),
//!     items[1].clone(),
//!     items[0].clone(),
//!     items[2].clone(),
//! ]
//! .into();
//!
//! let mut lru = Lru::new(2)?;
//! let online = lru.run(&trace);
//! let offline = Opt::new(2)?.run(&trace);
//! assert!(online >= offline);
//! # Ok::<(), policylab::Error>(())
//! ```

pub mod analysis;
pub mod common;
pub mod opt;
pub mod policy;

// Re-export commonly used items at crate root for convenience
pub use common::{make_items, Error, Item, Result, Trace};
pub use opt::{McfOpt, Opt};
pub use policy::{
    EagerLandlord, Landlord, Lru, Mru, Policy, PolicyKind, PriorityLandlord,
    PriorityLandlordUnique, ReplacementPolicy, RunStats,
};
