//! Page consumer configuration

use std::time::Duration;

/// Dataproxy address used when none is given
pub const DEFAULT_URL: &str = "http://localhost:8090";

/// Configuration for the page consumer
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Base URL of the dataproxy; pages are posted to `<base_url>/page`
    pub base_url: String,
    /// Request timeout. `None` keeps the HTTP client's default
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: None,
            user_agent: format!("pagebench/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ConsumerConfig {
    /// Create a new config builder
    pub fn builder() -> ConsumerConfigBuilder {
        ConsumerConfigBuilder::default()
    }

    /// Full URL of the page endpoint
    pub fn page_url(&self) -> String {
        format!("{}/page", self.base_url.trim_end_matches('/'))
    }
}

/// Builder for consumer config
#[derive(Default)]
pub struct ConsumerConfigBuilder {
    config: ConsumerConfig,
}

impl ConsumerConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ConsumerConfig {
        self.config
    }
}
