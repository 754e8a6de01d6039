//! Results of fetching one page and of a full pagination run

use std::time::Duration;

/// Outcome of a single page request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageFetch {
    /// Token of the following page, empty on the last page
    pub next_token: String,
    /// Number of records on the page
    pub record_count: usize,
    /// Time from sending the request until the response headers arrived
    pub request_duration: Duration,
    /// Time to read and decode the response body
    pub decode_duration: Duration,
}

impl PageFetch {
    /// Whether the server reported no further pages
    pub fn is_last_page(&self) -> bool {
        self.next_token.is_empty()
    }
}

/// Aggregates over every page of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Consumption {
    /// Pages fetched successfully
    pub page_count: usize,
    /// Record count of each page, in fetch order
    pub record_counts: Vec<usize>,
    /// Sum of per-page request durations
    pub total_request_duration: Duration,
    /// Sum of per-page decode durations
    pub total_decode_duration: Duration,
}

impl Consumption {
    /// Create an empty consumption
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one fetched page to the totals
    pub fn record(&mut self, page: &PageFetch) {
        self.page_count += 1;
        self.record_counts.push(page.record_count);
        self.total_request_duration += page.request_duration;
        self.total_decode_duration += page.decode_duration;
    }

    /// Total records across all pages
    pub fn total_records(&self) -> usize {
        self.record_counts.iter().sum()
    }
}
