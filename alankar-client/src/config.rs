//! Client configuration

/// Default REST endpoint of the content service
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";

/// Largest page the service hands out
pub const MAX_PAGE_SIZE: u32 = 100;

/// Content source configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | AIRTABLE_API_KEY | - | API token |
/// | AIRTABLE_BASE_ID | - | Base holding the content tables |
/// | AIRTABLE_API_URL | https://api.airtable.com/v0 | REST endpoint |
/// | AIRTABLE_TIMEOUT_SECS | 30 | Request timeout |
/// | AIRTABLE_PAGE_SIZE | 100 | Records per page (1..=100) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST endpoint (e.g. "https://api.airtable.com/v0")
    pub base_url: String,

    /// API token
    pub api_key: Option<String>,

    /// Base id
    pub base_id: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Records requested per page
    pub page_size: u32,
}

impl ClientConfig {
    /// Unconfigured client pointing at the default endpoint
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            base_id: None,
            timeout: 30,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Load from environment variables
    ///
    /// Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(url) = std::env::var("AIRTABLE_API_URL") {
            config.base_url = url;
        }
        config.api_key = std::env::var("AIRTABLE_API_KEY").ok();
        config.base_id = std::env::var("AIRTABLE_BASE_ID").ok();
        if let Some(timeout) = std::env::var("AIRTABLE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Some(page_size) = std::env::var("AIRTABLE_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.with_page_size(page_size);
        }
        config
    }

    /// Set API token and base id
    pub fn with_credentials(mut self, api_key: impl Into<String>, base_id: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.base_id = Some(base_id.into());
        self
    }

    /// Set the REST endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Both API key and base id present and non-empty
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.api_key) && present(&self.base_id)
    }

    /// Create an HTTP client, or `None` when credentials are absent
    pub fn build_http_client(&self) -> crate::ClientResult<Option<crate::HttpClient>> {
        if !self.is_configured() {
            return Ok(None);
        }
        crate::HttpClient::new(self).map(Some)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        let config = ClientConfig::new();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.build_http_client().unwrap().is_none());
    }

    #[test]
    fn test_blank_credentials_are_unconfigured() {
        let config = ClientConfig::new().with_credentials("  ", "app123");
        assert!(!config.is_configured());

        let config = ClientConfig::new().with_credentials("key", "app123");
        assert!(config.is_configured());
    }

    #[test]
    fn test_page_size_clamped() {
        assert_eq!(ClientConfig::new().with_page_size(500).page_size, MAX_PAGE_SIZE);
        assert_eq!(ClientConfig::new().with_page_size(0).page_size, 1);
        assert_eq!(ClientConfig::new().with_page_size(25).page_size, 25);
    }
}
