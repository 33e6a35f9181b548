//! Client configuration

use std::time::Duration;

/// Default clip API endpoint used by the upstream service in development
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration options for the feed client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the clip API (no trailing slash)
    pub base_url: String,

    /// Domain of the page hosting the embeds
    ///
    /// Twitch requires the hosting page's domain as a `parent` query
    /// parameter; a wrong value silently breaks playback, so this must come
    /// from the caller and is never hardcoded.
    pub parent_domain: String,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// User-Agent header sent with API requests
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            parent_domain: "localhost".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: concat!("clipfeed/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at a custom API base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            ..Default::default()
        }
    }

    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_trailing_slash(url.into());
        self
    }

    /// Set the embedding parent domain
    pub fn parent_domain(mut self, domain: impl Into<String>) -> Self {
        self.parent_domain = domain.into();
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
