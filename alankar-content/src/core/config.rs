use std::time::Duration;

use crate::content::CachePolicy;
use crate::content::cache::{CACHE_DURATION, FALLBACK_RETRY};

/// Content service configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CACHE_DURATION_SECS | 300 | Freshness window for live data |
/// | FALLBACK_RETRY_SECS | 30 | Freshness window for last-known-good and fallback data |
/// | LOG_LEVEL | info | Log level (`RUST_LOG` takes precedence) |
/// | LOG_JSON | false | Emit JSON log lines |
/// | ENVIRONMENT | development | Runtime environment |
///
/// Source credentials live in [`alankar_client::ClientConfig`].
///
/// # Example
///
/// ```ignore
/// CACHE_DURATION_SECS=60 LOG_LEVEL=debug cargo run -- menu
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// How long live content is served from cache
    pub cache_duration: Duration,
    /// How long non-live content is served before retrying the source
    pub fallback_retry: Duration,
    pub log_level: String,
    pub log_json: bool,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Defaults, ignoring the environment
    pub fn new() -> Self {
        Self {
            cache_duration: CACHE_DURATION,
            fallback_retry: FALLBACK_RETRY,
            log_level: "info".into(),
            log_json: false,
            environment: "development".into(),
        }
    }

    /// Load from environment variables
    ///
    /// Unset or unparsable values use the defaults.
    pub fn from_env() -> Self {
        Self {
            cache_duration: std::env::var("CACHE_DURATION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(CACHE_DURATION),
            fallback_retry: std::env::var("FALLBACK_RETRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(FALLBACK_RETRY),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            ttl: self.cache_duration,
            fallback_ttl: self.fallback_retry,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.cache_policy(), CachePolicy::default());
        assert!(config.is_development());
        assert!(!config.is_production());
        assert!(!config.log_json);
    }
}
