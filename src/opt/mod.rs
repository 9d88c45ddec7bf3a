//! Optimal-cost oracles.
//!
//! Both compute the minimum total miss cost achievable with full
//! knowledge of the trace, for a given capacity:
//! - [`Opt`] - Exhaustive branch-and-restore search, exponential, the
//!   ground truth for small traces
//! - [`McfOpt`] - The same optimum via a minimum-cost-flow reduction,
//!   polynomial
//!
//! The two must agree exactly on every trace; a disagreement is a defect
//! in one of them.

pub(crate) mod flow;
mod mcf;
mod search;

pub use mcf::McfOpt;
pub use search::Opt;
