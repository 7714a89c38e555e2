//! tr_io — history stream source, settings file, and source metadata.
//!
//! Single-source-of-truth I/O crate: everything that touches the filesystem
//! lives here. The engine crates (`tr_algo`, `tr_pipeline`) stay I/O-free and
//! consume the typed values this crate produces. Local files only.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for tr_io (stream reading + settings).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, metadata, read).
    #[error("io error: {0}")]
    Read(String),

    /// A stream line that failed to decode. Fatal: the run aborts rather
    /// than skip data.
    #[error("decode error at line {line}: {msg}")]
    Decode { line: usize, msg: String },

    /// Settings file shape/content errors.
    #[error("settings error: {0}")]
    Settings(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

pub mod settings;
pub mod stream;

pub use settings::Settings;
pub use stream::{SourceMeta, VersionReader};
