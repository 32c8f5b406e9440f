use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev/v1";
pub const PLACEHOLDER_API_KEY: &str = "YOUR_FIRECRAWL_API_KEY_HERE";

pub const DEFAULT_WAIT_FOR_MS: u64 = 2000;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FIRECRAWL_API_KEY is not set (get a key from https://firecrawl.dev)")]
    MissingApiKey,
    #[error("FIRECRAWL_API_KEY still holds the placeholder value")]
    PlaceholderApiKey,
    #[error("invalid Firecrawl API url {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Settings for talking to the Firecrawl scrape endpoint.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    pub api_key: String,
    pub api_url: String,
    /// How long Firecrawl lets the page settle before capturing it.
    pub wait_for: Duration,
    /// Firecrawl's own per-page budget.
    pub page_timeout: Duration,
}

impl FirecrawlConfig {
    /// Validate the credential and endpoint. Nothing touches the network here.
    pub fn new(api_key: Option<&str>, api_url: &str) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        if api_key == PLACEHOLDER_API_KEY {
            return Err(ConfigError::PlaceholderApiKey);
        }

        Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            source,
        })?;

        Ok(Self {
            api_key: api_key.to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
            wait_for: Duration::from_millis(DEFAULT_WAIT_FOR_MS),
            page_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn with_wait_for(mut self, wait_for: Duration) -> Self {
        self.wait_for = wait_for;
        self
    }

    pub fn with_page_timeout(mut self, page_timeout: Duration) -> Self {
        self.page_timeout = page_timeout;
        self
    }

    /// Hard ceiling on one HTTP round trip: twice the page budget.
    pub fn request_timeout(&self) -> Duration {
        self.page_timeout * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_key_is_rejected() {
        assert!(matches!(
            FirecrawlConfig::new(None, DEFAULT_API_URL),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            FirecrawlConfig::new(Some("   "), DEFAULT_API_URL),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn placeholder_key_is_rejected() {
        let err = FirecrawlConfig::new(Some(PLACEHOLDER_API_KEY), DEFAULT_API_URL).unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderApiKey));
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn bad_url_is_rejected() {
        let err = FirecrawlConfig::new(Some("fc-test"), "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl { .. }));
    }

    #[test]
    fn defaults_and_overrides() {
        let config = FirecrawlConfig::new(Some(" fc-test "), "http://127.0.0.1:3002/v1/").unwrap();
        assert_eq!(config.api_key, "fc-test");
        assert_eq!(config.api_url, "http://127.0.0.1:3002/v1");
        assert_eq!(config.wait_for, Duration::from_millis(2000));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));

        let config = config
            .with_wait_for(Duration::ZERO)
            .with_page_timeout(Duration::from_secs(5));
        assert_eq!(config.wait_for, Duration::ZERO);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
