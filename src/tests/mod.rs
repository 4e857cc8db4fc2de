//! Crate-internal tests that span several modules.
//!
//! - `common`: shared fixtures (sample cards and ranges)
//! - `property`: proptest invariants of the mapping engine

pub mod common;
mod property;
