//! CLI argument parsing

use crate::consumer::DEFAULT_URL;
use clap::Parser;

/// Benchmark a paginated dataproxy: fetch every page of a request and report timings
#[derive(Parser, Debug, Clone)]
#[command(name = "pagebench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to dataproxy
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Hash of request
    #[arg(long, default_value = "")]
    pub hash: String,

    /// Token of first page
    #[arg(long, default_value = "")]
    pub token: String,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
