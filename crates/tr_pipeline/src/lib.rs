//! tr_pipeline — one-pass orchestration: stream → gate → tally → rank.
//!
//! This crate stays thin on purpose: I/O lives in `tr_io`, the aggregation
//! primitives in `tr_algo`. One run consumes the version stream exactly once
//! in delivery order, keeps the raw per-kind totals, feeds the gate/tally,
//! and derives the ranked rows strictly after exhaustion. The tally and the
//! claim set are exclusively owned by the pass; the ranker only ever sees
//! the frozen records.

#![forbid(unsafe_code)]

use std::fmt;
use std::path::Path;

use tracing::debug;

use tr_algo::{rank, FirstTouchGate, UserTally};
use tr_core::{EntityKind, EntityVersion, Params};
use tr_io::{IoError, VersionReader};

// Convenience re-exports (downstream crates take these from the crate root).
pub use tr_algo::RankedRow;
pub use tr_io::SourceMeta;

/// Raw versions seen per kind, counted before dedup/filter. Operator
/// visibility only; attribution does not read these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub point_versions: u64,
    pub path_versions: u64,
    pub relation_versions: u64,
}

impl RunTotals {
    #[inline]
    fn bump(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Point => self.point_versions += 1,
            EntityKind::Path => self.path_versions += 1,
            EntityKind::Relation => self.relation_versions += 1,
        }
    }
}

/// Everything a run produces: totals, the filtered leaderboard, and the
/// framing values the report needs.
#[derive(Debug, Clone)]
pub struct PipelineOutputs {
    pub totals: RunTotals,
    /// Ordered highest score first, threshold already applied.
    pub rows: Vec<RankedRow>,
    /// Echo of the run configuration, for report framing.
    pub params: Params,
    pub source: SourceMeta,
}

/// Single error surface for the orchestration.
#[derive(Debug)]
pub enum PipelineError {
    /// The stream source failed to open or decode. Fatal: the run aborts
    /// with no partial result.
    Io(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "input error: {m}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        PipelineError::Io(e.to_string())
    }
}

/// Consume `stream` to exhaustion and produce the run outputs.
///
/// The stream is read once, in delivery order; any item error is fatal.
pub fn run<I>(
    stream: I,
    params: Params,
    source: SourceMeta,
) -> Result<PipelineOutputs, PipelineError>
where
    I: IntoIterator<Item = Result<EntityVersion, IoError>>,
{
    let mut totals = RunTotals::default();
    let mut gate = FirstTouchGate::new();
    let mut tally = UserTally::new();

    for item in stream {
        let version = item?;
        totals.bump(version.kind);
        if gate.admit(&version, &params.selector) {
            tally.record(&version.user, version.kind);
        }
    }
    debug!(
        entities = gate.claimed_len(),
        users = tally.len(),
        "stream exhausted"
    );

    let rows = rank(tally.into_records(), &params.weights, params.min_score);
    debug!(rows = rows.len(), "leaderboard derived");

    Ok(PipelineOutputs { totals, rows, params, source })
}

/// Open `path` via `tr_io::VersionReader` and run the full pass.
pub fn run_path<P: AsRef<Path>>(path: P, params: Params) -> Result<PipelineOutputs, PipelineError> {
    let reader = VersionReader::open(path)?;
    let source = reader.meta().clone();
    run(reader, params, source)
}
