//! Sequential page consumer
//!
//! Issues one `POST <url>/page` per page. Each call is timed in two parts:
//! - request: from sending until the response headers arrive
//! - decode: reading the body and deserializing it into a [`ResultSet`]

use super::config::ConsumerConfig;
use super::types::{Consumption, PageFetch};
use crate::error::{Error, Result};
use crate::page::{PageRequest, ResultSet};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

/// Fetches pages from a dataproxy one at a time
pub struct PageConsumer {
    client: Client,
    config: ConsumerConfig,
    page_url: String,
}

impl PageConsumer {
    /// Create a consumer with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ConsumerConfig::default())
    }

    /// Create a consumer for the given configuration.
    ///
    /// Fails if the base URL is not an absolute URL.
    pub fn with_config(config: ConsumerConfig) -> Result<Self> {
        Url::parse(&config.base_url)?;

        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let page_url = config.page_url();

        Ok(Self {
            client,
            config,
            page_url,
        })
    }

    /// Get the consumer configuration
    pub fn config(&self) -> &ConsumerConfig {
        &self.config
    }

    /// Full URL pages are posted to
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Fetch and decode a single page.
    ///
    /// A non-success status is an error; the body is not decoded.
    pub async fn fetch_page(&self, hash: &str, token: &str) -> Result<PageFetch> {
        let body = serde_json::to_vec(&PageRequest::new(hash, token)).map_err(Error::Encode)?;

        let sent = Instant::now();
        let response = self
            .client
            .post(&self.page_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let received = Instant::now();
        let request_duration = received - sent;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        let result: ResultSet = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
        let decode_duration = received.elapsed();

        let ragged = result.data.ragged_records();
        if !ragged.is_empty() {
            warn!(
                "Page {} has {} record(s) whose width differs from {} header column(s)",
                token,
                ragged.len(),
                result.data.header.columns.len()
            );
        }

        let record_count = result.record_count();
        debug!(
            "Fetched page {}: {} records, request {:?}, decode {:?}, next {:?}",
            token,
            record_count,
            request_duration,
            decode_duration,
            result.next_token()
        );

        Ok(PageFetch {
            next_token: result.meta.next_token,
            record_count,
            request_duration,
            decode_duration,
        })
    }

    /// Fetch every page starting at `first_token`.
    ///
    /// An empty first token yields an empty [`Consumption`] without any
    /// request. The first failing page aborts the run and nothing gathered
    /// so far is returned.
    pub async fn fetch_all_pages(&self, hash: &str, first_token: &str) -> Result<Consumption> {
        let mut consumption = Consumption::new();
        let mut token = first_token.to_string();

        while !token.is_empty() {
            let page = self.fetch_page(hash, &token).await?;
            consumption.record(&page);
            token = page.next_token;
        }

        info!(
            "Consumed {} pages ({} records) for hash {}",
            consumption.page_count,
            consumption.total_records(),
            hash
        );

        Ok(consumption)
    }
}

impl std::fmt::Debug for PageConsumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageConsumer")
            .field("config", &self.config)
            .field("page_url", &self.page_url)
            .finish_non_exhaustive()
    }
}
