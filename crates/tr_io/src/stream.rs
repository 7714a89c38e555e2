//! crates/tr_io/src/stream.rs
//! Stream reader: iterate a JSON Lines edit history in file order, one
//! `EntityVersion` per line. Single pass, no reordering; nothing is buffered
//! beyond the current line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;
use tr_core::EntityVersion;

use crate::{IoError, IoResult};

/// Source identity captured for report framing.
#[derive(Debug, Clone)]
pub struct SourceMeta {
    /// Path string as given by the caller.
    pub path: String,
    /// Filesystem modification time, when the platform reports one.
    pub modified: Option<DateTime<Utc>>,
}

impl SourceMeta {
    /// RFC 3339 UTC rendering of the modification time, or `"unknown"`.
    pub fn modified_display(&self) -> String {
        match self.modified {
            Some(t) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
            None => String::from("unknown"),
        }
    }
}

/// Streaming reader over a JSON Lines history file.
///
/// Yields versions in file order. Blank lines are skipped; any undecodable
/// line is a fatal input error surfaced to the caller.
pub struct VersionReader {
    lines: Lines<BufReader<File>>,
    line_no: usize,
    meta: SourceMeta,
}

impl VersionReader {
    /// Open `path` and capture its metadata for report framing.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| IoError::Read(format!("{}: {e}", path.display())))?;
        let modified = file
            .metadata()
            .ok()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);
        debug!(path = %path.display(), "opened history stream");
        Ok(VersionReader {
            lines: BufReader::new(file).lines(),
            line_no: 0,
            meta: SourceMeta {
                path: path.display().to_string(),
                modified,
            },
        })
    }

    pub fn meta(&self) -> &SourceMeta {
        &self.meta
    }
}

impl Iterator for VersionReader {
    type Item = IoResult<EntityVersion>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(l) => l,
                Err(e) => return Some(Err(IoError::from(e))),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|e| IoError::Decode {
                line: self.line_no,
                msg: e.to_string(),
            }));
        }
    }
}
