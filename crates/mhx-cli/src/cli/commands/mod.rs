//! CLI command handlers.

mod extract;

pub use extract::run_extract;
