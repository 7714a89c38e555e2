//! crates/tr_algo/src/gate.rs
//! First-touch gate: decides whether one version contributes to tallying.
//!
//! Contract, per version in stream order:
//! 1. reject when the entity `(kind, id)` has already been claimed
//! 2. otherwise accept iff the selector matches (wildcard, or key present)
//! 3. mark the entity claimed **only on acceptance**
//!
//! Step 3 means an entity whose early versions lack the attribute stays
//! unclaimed until a qualifying version arrives; that version's user gets
//! the credit, and every later version of the entity is dropped. Versions
//! rejected by the filter leave no trace.

use std::collections::HashSet;

use tr_core::{AttrSelector, EntityKind, EntityVersion};

/// Composite key marking an entity as attributed.
type ClaimKey = (EntityKind, i64);

/// Deduplicating attribute gate. One instance per run; the claim set only
/// grows.
#[derive(Debug, Default)]
pub struct FirstTouchGate {
    claimed: HashSet<ClaimKey>,
}

impl FirstTouchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities claimed so far.
    pub fn claimed_len(&self) -> usize {
        self.claimed.len()
    }

    /// Admit or drop one version. `true` means the version's user receives
    /// the attribution credit and the entity is now claimed.
    pub fn admit(&mut self, version: &EntityVersion, selector: &AttrSelector) -> bool {
        let key = version.entity_key();
        if self.claimed.contains(&key) {
            return false;
        }
        let accepted = match selector {
            AttrSelector::Any => true,
            AttrSelector::Key(k) => version.attrs.contains_key(k),
        };
        if accepted {
            self.claimed.insert(key);
        }
        accepted
    }
}
