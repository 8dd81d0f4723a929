//! CLI for the MHX MHTML resource extractor.

mod commands;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use commands::run_extract;

/// Top-level CLI: one archive in, one directory of extracted files out.
#[derive(Debug, Parser)]
#[command(name = "mhx")]
#[command(about = "MHX: extract resources from an MHTML archive and fix up references", long_about = None)]
pub struct Cli {
    /// Path to the .mhtml archive.
    pub archive: PathBuf,

    /// Destination directory (default: archive path with its extension dropped).
    pub dest: Option<PathBuf>,

    /// Suppress per-file progress lines; only the final summary is printed.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.print().ok();
                return Ok(());
            }
            Err(err) => {
                // Usage goes to stderr with exit code 1 (not clap's 2).
                err.print().ok();
                std::process::exit(1);
            }
        };

        run_extract(&cli.archive, cli.dest.as_deref(), cli.quiet)
    }
}
