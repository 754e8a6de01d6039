//! Plain-text reporter

use crate::consumer::Consumption;
use crate::error::Result;
use std::io::Write;

/// Writes the summary of a pagination run
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<std::io::Stdout> {
    /// Create a reporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print the outcome of a run.
    ///
    /// The hash and first token are always printed. A failed run prints only
    /// the error after them.
    pub fn print(
        &mut self,
        hash: &str,
        first_token: &str,
        outcome: &Result<Consumption>,
    ) -> Result<()> {
        writeln!(self.out, "Hash: {hash}, First Token: {first_token}")?;

        match outcome {
            Err(e) => writeln!(self.out, "Error: {e}")?,
            Ok(consumption) => {
                writeln!(self.out, "  Pages: {}", consumption.page_count)?;
                writeln!(self.out, "  Records: {}", consumption.total_records())?;
                writeln!(
                    self.out,
                    "  Duration to retrieve pages: {:?}",
                    consumption.total_request_duration
                )?;
                writeln!(
                    self.out,
                    "  Duration to unmarshal pages: {:?}",
                    consumption.total_decode_duration
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Consume the reporter, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
