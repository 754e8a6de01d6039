//! Error types for pagebench
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Configuration errors are raised before any network activity; every other
//! variant is a transport error that aborts the pagination loop.

use thiserror::Error;

/// The main error type for pagebench
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("invalid arguments")]
    InvalidArguments,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("Failed to encode page request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode page: {0}")]
    Decode(#[source] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Check if this error came from building, sending or decoding a page request
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Encode(_) | Error::Http(_) | Error::HttpStatus { .. } | Error::Decode(_)
        )
    }

    /// Check if this error was caused by bad command-line input
    pub fn is_config(&self) -> bool {
        matches!(self, Error::InvalidArguments | Error::InvalidUrl(_))
    }
}

/// Result type alias for pagebench
pub type Result<T> = std::result::Result<T, Error>;
