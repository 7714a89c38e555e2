//! crates/tr_algo/src/rank.rs
//! Ranking: the terminal transform from finished tally records to the
//! filtered leaderboard. Runs once, after the stream is exhausted; the
//! output rows are immutable.

use tr_core::Weights;

use crate::tally::UserRecord;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    /// Dense 1-based rank; surviving rows are always exactly 1..K.
    pub rank: u32,
    pub user: String,
    pub points: u64,
    pub paths: u64,
    pub relations: u64,
    pub score: u64,
    pub total: u64,
}

/// Weighted score of one record. Exact integer arithmetic.
#[inline]
pub fn score_of(rec: &UserRecord, weights: &Weights) -> u64 {
    rec.points * weights.point + rec.paths * weights.path + rec.relations * weights.relation
}

/// Sort descending by score (stable: ties keep first-seen order), assign
/// ranks 1..N in sorted order, then cut at the threshold.
///
/// The cut is a truncation at the first below-threshold row; with the rows
/// sorted descending that is the same set as filtering, and it keeps the
/// surviving ranks a gapless 1..K. The discarded tail's rank numbers are not
/// reused. An empty result is normal, not an error.
pub fn rank(records: Vec<UserRecord>, weights: &Weights, min_score: u64) -> Vec<RankedRow> {
    let mut scored: Vec<(UserRecord, u64)> = records
        .into_iter()
        .map(|rec| {
            let score = score_of(&rec, weights);
            (rec, score)
        })
        .collect();
    // sort_by is stable: equal scores keep their relative insertion order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut rows = Vec::with_capacity(scored.len());
    for (i, (rec, score)) in scored.into_iter().enumerate() {
        if score < min_score {
            break; // sorted descending: everything after is below the cut too
        }
        let total = rec.total();
        rows.push(RankedRow {
            rank: (i + 1) as u32,
            user: rec.user,
            points: rec.points,
            paths: rec.paths,
            relations: rec.relations,
            score,
            total,
        });
    }
    rows
}
