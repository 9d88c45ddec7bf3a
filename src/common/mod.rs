//! Common types shared across policylab.
//!
//! This module contains the fundamental primitives used throughout the
//! codebase:
//! - Error types
//! - Cache items and the `make_items` fixture helper
//! - Access traces

pub mod error;
mod item;
mod trace;

pub use error::{Error, Result};
pub use item::{make_items, Item};
pub use trace::Trace;
