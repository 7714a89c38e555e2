//! crates/tr_io/src/settings.rs
//! Optional settings file: one small JSON document that can pre-fill any
//! part of the run configuration. Explicit command-line flags always win;
//! the merge itself happens in the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{IoError, IoResult};

/// Per-kind multipliers as spelled in the settings file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsWeights {
    pub point: Option<u64>,
    pub path: Option<u64>,
    pub relation: Option<u64>,
}

/// Settings document. Every field is optional; omitted fields fall back to
/// flags or built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub file: Option<String>,
    pub attribute: Option<String>,
    pub min_score: Option<u64>,
    pub out: Option<String>,
    pub weights: Option<SettingsWeights>,
}

impl Settings {
    /// Load and parse a settings file. Unknown fields are rejected so typos
    /// fail loudly instead of silently falling back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| IoError::Settings(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| IoError::Settings(format!("{}: {e}", path.display())))
    }
}
