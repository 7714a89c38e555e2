//! tr_core — Core types and parameter domains for the tagrank engine.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! workspace (`tr_io`, `tr_algo`, `tr_pipeline`, `tr_report`, `tr_cli`):
//!
//! - Entity model: `EntityKind`, `EntityVersion`
//! - Run configuration: `AttrSelector`, `Weights`, `Params`
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod entity;
pub mod params;

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// The attribute selector was empty; the filter decision would be
        /// undefined without one.
        EmptySelector,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::EmptySelector => write!(f, "empty attribute selector"),
            }
        }
    }
}

pub use entity::{EntityKind, EntityVersion};
pub use params::{AttrSelector, Params, Weights, DEFAULT_MIN_SCORE};
