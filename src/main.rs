//! pagebench CLI
//!
//! Fetches every page of a dataproxy request and prints retrieval and decode timings

use clap::Parser;
use pagebench::cli::{Cli, Runner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the report
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        // Transport errors are already part of the printed report
        if !e.is_transport() {
            eprintln!("{e}");
        }
        std::process::exit(1);
    }
}
