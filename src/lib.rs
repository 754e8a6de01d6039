//! # pagebench
//!
//! A benchmarking client for paginated JSON dataproxy services.
//!
//! Given a request hash and the token of its first page, pagebench posts
//! `{"hash", "token"}` to `<url>/page` until the server answers with an empty
//! next token, then reports how many pages and records came back and how the
//! time split between the network round trip and JSON decoding.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagebench::consumer::{ConsumerConfig, PageConsumer};
//! use pagebench::report::Reporter;
//!
//! #[tokio::main]
//! async fn main() -> pagebench::Result<()> {
//!     let config = ConsumerConfig::builder()
//!         .base_url("http://localhost:8090")
//!         .build();
//!     let consumer = PageConsumer::with_config(config)?;
//!
//!     let outcome = consumer.fetch_all_pages("5f1d9c", "first-page").await;
//!     Reporter::stdout().print("5f1d9c", "first-page", &outcome)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   Cli ──► Runner ──► PageConsumer::fetch_all_pages ──► Reporter
//!                           │
//!                           └─ fetch_page: POST /page → ResultSet
//! ```
//!
//! Pages are fetched strictly one after another since each request needs the
//! token returned by the previous one. Any failure ends the run.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Page request and result set wire types
pub mod page;

/// Sequential page fetching and timing
pub mod consumer;

/// Run summary output
pub mod report;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use consumer::{ConsumerConfig, Consumption, PageConsumer, PageFetch};
pub use error::{Error, Result};
pub use page::{Column, Header, PageData, PageMeta, PageRequest, ResultSet};
pub use report::Reporter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
