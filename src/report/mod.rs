//! Run summary output
//!
//! Formats the outcome of a pagination run for the terminal.

mod reporter;

pub use reporter::Reporter;
