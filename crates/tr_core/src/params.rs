//! crates/tr_core/src/params.rs
//! Run configuration domain. The whole configuration travels as one
//! immutable `Params` value threaded into the gate and the ranker; nothing
//! in the engine reads ambient state.

use alloc::string::String;
use core::fmt;

use crate::entity::EntityKind;
use crate::errors::CoreError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minimum score for a user to appear in the report.
pub const DEFAULT_MIN_SCORE: u64 = 100;

/// Attribute-key selector for the gate: a literal key, or the `*` wildcard
/// meaning "accept every version".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttrSelector {
    Any,
    Key(String),
}

impl AttrSelector {
    /// Parse the CLI/settings spelling: `*` is the wildcard, anything else a
    /// literal key. Empty input is rejected.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CoreError::EmptySelector);
        }
        if s == "*" {
            Ok(AttrSelector::Any)
        } else {
            Ok(AttrSelector::Key(String::from(s)))
        }
    }
}

impl fmt::Display for AttrSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrSelector::Any => f.write_str("*"),
            AttrSelector::Key(k) => f.write_str(k),
        }
    }
}

/// Per-kind score multipliers (non-negative integers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    pub point: u64,
    pub path: u64,
    pub relation: u64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights { point: 1, path: 5, relation: 10 }
    }
}

impl Weights {
    #[inline]
    pub fn for_kind(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Point => self.point,
            EntityKind::Path => self.path,
            EntityKind::Relation => self.relation,
        }
    }
}

/// Immutable run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    pub selector: AttrSelector,
    pub weights: Weights,
    /// Inclusive lower bound on the score for report inclusion.
    pub min_score: u64,
}

impl Params {
    /// Configuration with default weights and threshold.
    pub fn new(selector: AttrSelector) -> Self {
        Params {
            selector,
            weights: Weights::default(),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}
