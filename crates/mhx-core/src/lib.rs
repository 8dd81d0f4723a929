//! mhx-core: extracts embedded resources from MHTML web-page archives,
//! rewrites `cid:`/Content-Location references to point at the extracted
//! files, and pretty-prints the markup.

pub mod config;
pub mod logging;

pub mod alias;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod materialize;
pub mod naming;
pub mod prettify;
pub mod rewrite;

pub use error::ExtractError;
pub use extract::{extract_archive, ExtractReport, WrittenFile};
