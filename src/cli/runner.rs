//! CLI runner - validates input, consumes pages and reports

use crate::cli::commands::Cli;
use crate::consumer::{ConsumerConfig, Consumption, PageConsumer};
use crate::error::{Error, Result};
use crate::report::Reporter;
use std::io::Write;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the benchmark, printing the report to standard output
    pub async fn run(&self) -> Result<Consumption> {
        self.run_with(&mut Reporter::stdout()).await
    }

    /// Run the benchmark, printing the report through `reporter`.
    ///
    /// Invalid input fails before any request is made and before anything is
    /// printed. Transport errors are printed in the report and then returned.
    pub async fn run_with<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<Consumption> {
        let consumer = PageConsumer::with_config(self.consumer_config()?)?;
        debug!("Posting pages to {}", consumer.page_url());

        let outcome = consumer
            .fetch_all_pages(&self.cli.hash, &self.cli.token)
            .await;

        reporter.print(&self.cli.hash, &self.cli.token, &outcome)?;
        outcome
    }

    /// Build the consumer config, rejecting empty inputs
    fn consumer_config(&self) -> Result<ConsumerConfig> {
        if self.cli.url.is_empty() || self.cli.hash.is_empty() || self.cli.token.is_empty() {
            return Err(Error::InvalidArguments);
        }

        Ok(ConsumerConfig::builder().base_url(&self.cli.url).build())
    }
}
