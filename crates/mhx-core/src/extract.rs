//! End-to-end extraction of one archive.
//!
//! Two stages, no feedback loop: materialize every part into a named
//! record plus the alias table, then rewrite and write each record out.
//! Decode and formatting problems degrade per record; missing input and
//! filesystem failures abort the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MhxConfig;
use crate::envelope;
use crate::error::ExtractError;
use crate::materialize::materialize;
use crate::prettify::prettify_html;
use crate::rewrite::Rewriter;

/// One file emitted by a run.
#[derive(Debug)]
pub struct WrittenFile {
    pub filename: String,
    pub is_markup: bool,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct ExtractReport {
    pub dest_dir: PathBuf,
    pub files: Vec<WrittenFile>,
    /// Markup records written unformatted because the pretty-printer
    /// rejected them.
    pub formatting_fallbacks: usize,
}

/// Extracts `archive` into `dest_override`, or into a directory named
/// after the archive with its extension dropped.
///
/// Writes one file per part: markup parts are alias-substituted and
/// pretty-printed (unless disabled in `config`), everything else is
/// written verbatim.
pub fn extract_archive(
    archive: &Path,
    dest_override: Option<&Path>,
    config: &MhxConfig,
) -> Result<ExtractReport, ExtractError> {
    if !archive.exists() {
        return Err(ExtractError::InputMissing(archive.to_path_buf()));
    }

    let dest_dir = match dest_override {
        Some(dir) => dir.to_path_buf(),
        None => archive.with_extension(""),
    };
    fs::create_dir_all(&dest_dir).map_err(|e| ExtractError::io(&dest_dir, e))?;

    let raw = fs::read(archive).map_err(|e| ExtractError::io(archive, e))?;
    let parts = envelope::parse_envelope(&raw)?;
    tracing::info!(
        archive = %archive.display(),
        parts = parts.len(),
        "parsed archive envelope"
    );

    let (records, aliases) = materialize(&parts, &dest_dir, config);
    tracing::debug!(aliases = aliases.len(), records = records.len(), "materialized");

    let rewriter = match Rewriter::compile(&aliases) {
        Ok(rw) => Some(rw),
        Err(err) => {
            tracing::warn!("alias pattern unusable, references left as-is: {err:#}");
            None
        }
    };

    let mut files = Vec::with_capacity(records.len());
    let mut formatting_fallbacks = 0usize;

    for record in records {
        let path = dest_dir.join(&record.filename);
        if record.is_markup {
            let text = match record.text {
                Some(t) => t,
                None => String::from_utf8_lossy(&record.payload).into_owned(),
            };
            let substituted = match &rewriter {
                Some(rw) => rw.rewrite(&text),
                None => text,
            };
            let output = if config.pretty_print {
                match prettify_html(&substituted, config.indent_width) {
                    Ok(pretty) => pretty,
                    Err(err) => {
                        tracing::warn!(
                            file = %record.filename,
                            "pretty-printing failed, writing unformatted: {err:#}"
                        );
                        formatting_fallbacks += 1;
                        substituted
                    }
                }
            } else {
                substituted
            };
            fs::write(&path, output).map_err(|e| ExtractError::io(&path, e))?;
        } else {
            fs::write(&path, &record.payload).map_err(|e| ExtractError::io(&path, e))?;
        }
        tracing::info!(file = %path.display(), markup = record.is_markup, "wrote");
        files.push(WrittenFile {
            filename: record.filename,
            is_markup: record.is_markup,
        });
    }

    Ok(ExtractReport {
        dest_dir,
        files,
        formatting_fallbacks,
    })
}
