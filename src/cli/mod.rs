//! CLI module
//!
//! Command-line interface for benchmarking a dataproxy.
//!
//! Three inputs drive a run: `--url`, `--hash` and `--token`. The runner
//! validates them, fetches every page and prints the summary.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
