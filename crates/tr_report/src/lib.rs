//! tr_report — pure offline report model + renderers (HTML/JSON).
//!
//! No recomputation happens here: the model is a presentation view over the
//! finished `PipelineOutputs`. No I/O either; renderers return strings and
//! the caller decides where they go. Renderers are feature-gated
//! (`render_html`, `render_json`) so consumers link only what they emit.

#![deny(unsafe_code)]

use serde::Serialize;

use tr_pipeline::PipelineOutputs;

#[cfg(feature = "render_html")]
mod render_html;
#[cfg(feature = "render_json")]
mod render_json;

#[cfg(feature = "render_html")]
pub use render_html::render_html;
#[cfg(feature = "render_json")]
pub use render_json::render_json;

/// Fixed column schema of the leaderboard table.
pub const COLUMNS: [&str; 7] = ["Rank", "User", "Points", "Paths", "Relations", "Score", "Count"];

/// Rendering errors.
#[derive(Debug)]
pub enum ReportError {
    Template(&'static str),
    Serialize(&'static str),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Template(stage) => write!(f, "template error: {stage}"),
            ReportError::Serialize(what) => write!(f, "serialize error: {what}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Presentation view of one leaderboard row.
#[derive(Clone, Debug, Serialize)]
pub struct RowView {
    pub rank: u32,
    pub user: String,
    pub points: u64,
    pub paths: u64,
    pub relations: u64,
    pub score: u64,
    pub total: u64,
}

/// Per-kind multipliers echoed into the score-formula line.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct WeightsView {
    pub point: u64,
    pub path: u64,
    pub relation: u64,
}

/// Raw versions seen per kind, echoed for operator visibility.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TotalsView {
    pub point_versions: u64,
    pub path_versions: u64,
    pub relation_versions: u64,
}

/// Top-level report model. Built once from the finished run; immutable.
#[derive(Clone, Debug, Serialize)]
pub struct ReportModel {
    pub title: String,
    /// Attribute key the run filtered on (`*` = any).
    pub attribute: String,
    pub source_path: String,
    /// RFC 3339 UTC, or `"unknown"` when the filesystem gave no mtime.
    pub source_modified: String,
    pub weights: WeightsView,
    pub min_score: u64,
    pub totals: TotalsView,
    pub columns: [&'static str; 7],
    pub rows: Vec<RowView>,
}

/// Build the report model from the finished run outputs (pure, offline).
pub fn build_model(outputs: &PipelineOutputs) -> ReportModel {
    ReportModel {
        title: String::from("Contributor leaderboard"),
        attribute: outputs.params.selector.to_string(),
        source_path: outputs.source.path.clone(),
        source_modified: outputs.source.modified_display(),
        weights: WeightsView {
            point: outputs.params.weights.point,
            path: outputs.params.weights.path,
            relation: outputs.params.weights.relation,
        },
        min_score: outputs.params.min_score,
        totals: TotalsView {
            point_versions: outputs.totals.point_versions,
            path_versions: outputs.totals.path_versions,
            relation_versions: outputs.totals.relation_versions,
        },
        columns: COLUMNS,
        rows: outputs
            .rows
            .iter()
            .map(|r| RowView {
                rank: r.rank,
                user: r.user.clone(),
                points: r.points,
                paths: r.paths,
                relations: r.relations,
                score: r.score,
                total: r.total,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tr_core::{AttrSelector, Params, Weights};
    use tr_pipeline::{RunTotals, SourceMeta};

    fn outputs() -> PipelineOutputs {
        PipelineOutputs {
            totals: RunTotals {
                point_versions: 4,
                path_versions: 2,
                relation_versions: 1,
            },
            rows: vec![tr_algo::RankedRow {
                rank: 1,
                user: String::from("alice"),
                points: 2,
                paths: 1,
                relations: 0,
                score: 7,
                total: 3,
            }],
            params: Params {
                selector: AttrSelector::Key(String::from("amenity")),
                weights: Weights::default(),
                min_score: 5,
            },
            source: SourceMeta { path: String::from("history.jsonl"), modified: None },
        }
    }

    #[test]
    fn model_echoes_the_run_framing() {
        let model = build_model(&outputs());
        assert_eq!(model.attribute, "amenity");
        assert_eq!(model.source_path, "history.jsonl");
        assert_eq!(model.source_modified, "unknown");
        assert_eq!(model.min_score, 5);
        assert_eq!(model.totals.point_versions, 4);
        assert_eq!(model.columns[0], "Rank");
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.rows[0].user, "alice");
    }

    #[test]
    fn wildcard_selector_renders_as_star() {
        let mut out = outputs();
        out.params.selector = AttrSelector::Any;
        assert_eq!(build_model(&out).attribute, "*");
    }
}
