//! crates/tr_report/src/render_json.rs
//! JSON renderer: the model serialized as-is (stable field order comes from
//! the struct layout), for scripting consumers.

use crate::{ReportError, ReportModel};

/// Serialize the model as pretty-printed JSON.
pub fn render_json(model: &ReportModel) -> Result<String, ReportError> {
    serde_json::to_string_pretty(model).map_err(|_| ReportError::Serialize("report model"))
}
