//! crates/tr_algo/src/tally.rs
//! Per-user tally: one record per user, O(1) amortized lookup, first-seen
//! insertion order preserved for downstream tie-breaking.

use std::collections::HashMap;

use tr_core::EntityKind;

/// Running counters for one user. Counters only ever grow; records are never
/// removed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user: String,
    pub points: u64,
    pub paths: u64,
    pub relations: u64,
}

impl UserRecord {
    fn new(user: String) -> Self {
        UserRecord { user, points: 0, paths: 0, relations: 0 }
    }

    /// Sum of all three counters.
    #[inline]
    pub fn total(&self) -> u64 {
        self.points + self.paths + self.relations
    }
}

/// Accumulator over all users seen during the pass.
///
/// Records live in first-seen order in `records`; `index` maps a user name
/// to its slot. Iteration for ranking always goes through the ordered
/// records, never the map, so map iteration order is irrelevant.
#[derive(Debug, Default)]
pub struct UserTally {
    records: Vec<UserRecord>,
    index: HashMap<String, usize>,
}

impl UserTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Credit one attributed entity of `kind` to `user`, creating the record
    /// on first sight.
    pub fn record(&mut self, user: &str, kind: EntityKind) {
        let slot = match self.index.get(user) {
            Some(&i) => i,
            None => {
                let i = self.records.len();
                self.records.push(UserRecord::new(user.to_string()));
                self.index.insert(user.to_string(), i);
                i
            }
        };
        let rec = &mut self.records[slot];
        match kind {
            EntityKind::Point => rec.points += 1,
            EntityKind::Path => rec.paths += 1,
            EntityKind::Relation => rec.relations += 1,
        }
    }

    /// Borrowing view in first-seen order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Freeze the accumulation and hand the records to the ranking phase.
    pub fn into_records(self) -> Vec<UserRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_land_on_the_matching_kind() {
        let mut tally = UserTally::new();
        tally.record("alice", EntityKind::Point);
        tally.record("alice", EntityKind::Path);
        tally.record("alice", EntityKind::Path);
        tally.record("alice", EntityKind::Relation);

        let recs = tally.into_records();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].points, 1);
        assert_eq!(recs[0].paths, 2);
        assert_eq!(recs[0].relations, 1);
        assert_eq!(recs[0].total(), 4);
    }

    #[test]
    fn records_keep_first_seen_order() {
        let mut tally = UserTally::new();
        tally.record("carol", EntityKind::Point);
        tally.record("alice", EntityKind::Point);
        tally.record("bob", EntityKind::Point);
        tally.record("alice", EntityKind::Relation);

        let users: Vec<&str> = tally.records().iter().map(|r| r.user.as_str()).collect();
        assert_eq!(users, ["carol", "alice", "bob"]);
    }

    #[test]
    fn empty_tally_yields_no_records() {
        let tally = UserTally::new();
        assert!(tally.is_empty());
        assert!(tally.into_records().is_empty());
    }
}
