use std::time::Duration;

/// Where the client talks to. Passed in at construction, never read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the fridge API (rules, products, ratings, skin type).
    /// Default: http://localhost:8000
    pub api_url: String,

    /// Base URL of the frontend that serves static data such as
    /// `data/tags.json`. Default: http://localhost:3000
    pub frontend_url: String,

    /// Per-request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

fn trim_base(url: impl Into<String>) -> String {
    url.into().trim().trim_end_matches('/').to_string()
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_base(url);
        self
    }

    pub fn with_frontend_url(mut self, url: impl Into<String>) -> Self {
        self.frontend_url = trim_base(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check both base URLs are http(s) and the timeout is non-zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [("api_url", &self.api_url), ("frontend_url", &self.frontend_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }
        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than zero");
        }
        Ok(())
    }
}
