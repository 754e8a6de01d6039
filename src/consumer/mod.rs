//! Page consumer module
//!
//! Fetches every page of a paginated result, one request at a time, and
//! measures how long the network round trip and the JSON decoding take.
//!
//! # Overview
//!
//! - [`PageConsumer::fetch_page`] posts one [`PageRequest`](crate::page::PageRequest)
//!   and decodes the returned [`ResultSet`](crate::page::ResultSet)
//! - [`PageConsumer::fetch_all_pages`] follows next-page tokens until the
//!   server returns an empty one
//!
//! The first failing page aborts the run. There is no retry.

mod client;
mod config;
mod types;

pub use client::PageConsumer;
pub use config::{ConsumerConfig, ConsumerConfigBuilder, DEFAULT_URL};
pub use types::{Consumption, PageFetch};

#[cfg(test)]
mod tests;
