//! Logging init: file under the XDG state dir, stderr when that fails.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging. Writes to `~/.local/state/mhx/mhx.log`
/// when the state dir is usable; otherwise logs to stderr so the CLI
/// still runs on read-only homes.
pub fn init() {
    match open_log_file() {
        Ok((file, path)) => {
            init_with_writer(BoxMakeWriter::new(Mutex::new(file)));
            tracing::info!("mhx logging initialized at {}", path.display());
        }
        Err(err) => {
            init_with_writer(BoxMakeWriter::new(std::io::stderr));
            tracing::warn!("log file unavailable, logging to stderr: {err:#}");
        }
    }
}

fn init_with_writer(writer: BoxMakeWriter) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,mhx=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mhx")?;
    let path = xdg_dirs.place_state_file("mhx.log")?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
