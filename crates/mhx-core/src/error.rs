//! Error taxonomy for the extraction pipeline.
//!
//! Decode and formatting problems are absorbed where they occur (lossy
//! decode, unformatted fallback) and never surface here; only conditions
//! that abort a run become variants.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Archive path does not exist. Nothing is written.
    #[error("archive not found: {0}")]
    InputMissing(PathBuf),

    /// The container could not be parsed as a MIME multipart message.
    #[error("failed to parse archive envelope: {0}")]
    Envelope(#[from] mailparse::MailParseError),

    /// Filesystem failure (unwritable destination, disk full). Aborts the
    /// run for this archive.
    #[error("filesystem error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
