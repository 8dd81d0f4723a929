//! Extract command: run the whole pipeline for one archive.

use anyhow::Result;
use mhx_core::{config, extract_archive, ExtractError};
use std::path::Path;

/// Extract `archive` into `dest` (or the derived directory) and report
/// progress on stdout.
///
/// A missing archive is reported but is not a process failure; the
/// original tool's contract is "reported, not raised".
pub fn run_extract(archive: &Path, dest: Option<&Path>, quiet: bool) -> Result<()> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    match extract_archive(archive, dest, &cfg) {
        Ok(report) => {
            if !quiet {
                for file in &report.files {
                    let kind = if file.is_markup { "html" } else { "resource" };
                    println!(
                        "saved {kind}: {}",
                        report.dest_dir.join(&file.filename).display()
                    );
                }
            }
            if report.formatting_fallbacks > 0 {
                println!(
                    "warning: {} markup file(s) written unformatted",
                    report.formatting_fallbacks
                );
            }
            println!(
                "extraction complete: {} file(s) in {}",
                report.files.len(),
                report.dest_dir.display()
            );
            Ok(())
        }
        Err(ExtractError::InputMissing(path)) => {
            eprintln!("archive not found: {}", path.display());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
