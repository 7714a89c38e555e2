// crates/tr_algo/src/lib.rs
#![forbid(unsafe_code)]

//! tr_algo — the aggregation core: first-touch gate, per-user tally, and
//! score ranking.
//!
//! Everything here is pure and I/O-free. The pipeline feeds versions in
//! stream order; the types below hold the only mutable state of a run.
//!
//! Determinism rules:
//! - first-touch attribution is order-dependent by contract; callers must
//!   deliver versions in stream order
//! - ranking sorts stably, so score ties keep first-seen user order
//! - integer arithmetic only, no floats, no RNG

// File modules (actual implementations)
pub mod gate;
pub mod rank;
pub mod tally;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use gate::FirstTouchGate;
pub use rank::{rank, score_of, RankedRow};
pub use tally::{UserRecord, UserTally};
