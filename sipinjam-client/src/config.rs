//! Client configuration

use std::time::Duration;

use crate::{ClientResult, NetworkHttpClient, Session};

/// Client configuration for connecting to the booking API
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SIPINJAM_API_URL | http://localhost:5000 | API base URL |
/// | SIPINJAM_TIMEOUT_SECS | 30 | request timeout (seconds) |
/// | SIPINJAM_PAGE_SIZE | 10 | default rows per table page |
/// | SIPINJAM_SEARCH_DEBOUNCE_MS | 500 | search debounce delay |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Rows per page requested by list calls
    pub page_size: u32,

    /// Delay before a changed search query is sent
    pub search_debounce_ms: u64,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            page_size: 10,
            search_debounce_ms: 500,
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::new(
            std::env::var("SIPINJAM_API_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.into()),
        );
        Self {
            timeout: std::env::var("SIPINJAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            page_size: std::env::var("SIPINJAM_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.page_size),
            search_debounce_ms: std::env::var("SIPINJAM_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.search_debounce_ms),
            ..defaults
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the page size (0 is ignored)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    /// Set the search debounce delay
    pub fn with_search_debounce_ms(mut self, millis: u64) -> Self {
        self.search_debounce_ms = millis;
        self
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self, session: Session) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self, session)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
