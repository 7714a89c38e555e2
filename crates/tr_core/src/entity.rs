//! crates/tr_core/src/entity.rs
//! Entity model: kind tags and versioned snapshots as delivered by the
//! stream source. No geometry, no timestamps; attribution needs only the
//! identity, the author, and the attribute keys.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind tag of a versioned entity. Lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    Point,
    Path,
    Relation,
}

impl EntityKind {
    /// Stable lowercase name (wire + display).
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Point => "point",
            EntityKind::Path => "path",
            EntityKind::Relation => "relation",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One historical snapshot of an entity.
///
/// Produced by the stream source in file order; consumed exactly once by the
/// aggregation pass and not retained afterwards. The same `(kind, id)` pair
/// may appear many times in a stream, once per historical version.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityVersion {
    pub kind: EntityKind,
    /// Stable identifier, unique within a kind (ids are a per-kind space:
    /// point 7 and path 7 are different entities).
    pub id: i64,
    pub user: String,
    /// Attribute keys and values at this version. A missing field on the
    /// wire is an empty mapping, not an error.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attrs: BTreeMap<String, String>,
}

impl EntityVersion {
    /// Key identifying the entity this version belongs to.
    #[inline]
    pub fn entity_key(&self) -> (EntityKind, i64) {
        (self.kind, self.id)
    }
}
