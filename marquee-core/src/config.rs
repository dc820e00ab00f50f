//! Centralized configuration for Marquee.
//!
//! All tunable parameters live here so search, session and web code never
//! carry their own hard-coded endpoints or timings.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::MarqueeError;

/// Central configuration for all Marquee components.
///
/// Supports environment variable overrides via [`MarqueeConfig::from_env`];
/// CLI flags are applied on top by the binary.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    /// Search endpoint, credentials and cache
    pub search: SearchConfig,
    /// Debounce and presentation of interactive sessions
    pub session: SessionConfig,
    /// Web server binding
    pub web: WebConfig,
    /// Flat JSON file overlaying the built-in English messages
    pub locale_file: Option<PathBuf>,
}

/// Remote search endpoint configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// OMDb-compatible endpoint queried with `apikey`, `s` and `page`
    pub base_url: String,
    /// API key sent with every request, required for the remote provider
    pub api_key: Option<String>,
    /// Upper bound for a single search request
    pub request_timeout: Duration,
    /// Maximum query keys kept in the session cache
    pub cache_capacity: usize,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Serve results from the built-in development catalog instead of the network
    pub development_catalog: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(10),
            cache_capacity: 256,
            user_agent: "marquee/0.1.0",
            development_catalog: false,
        }
    }
}

impl SearchConfig {
    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Base URL is not an absolute http(s) URL
    pub fn endpoint(&self) -> Result<Url, MarqueeError> {
        let url = Url::parse(&self.base_url).map_err(|e| MarqueeError::Configuration {
            reason: format!("invalid search endpoint '{}': {e}", self.base_url),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(MarqueeError::Configuration {
                reason: format!("unsupported search endpoint scheme '{scheme}'"),
            }),
        }
    }

    /// Returns the API key, failing when none was configured.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - No key set or key is blank
    pub fn require_api_key(&self) -> Result<&str, MarqueeError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| MarqueeError::Configuration {
                reason: "missing OMDb API key (set OMDB_API_KEY)".to_string(),
            })
    }
}

/// Interactive session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiet period before a typed term becomes a query
    pub debounce: Duration,
    /// Placeholder tiles shown while idle, loading or empty
    pub placeholder_tiles: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(800),
            placeholder_tiles: 9,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable numeric values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            config.search.api_key = Some(key);
        }

        if let Ok(url) = std::env::var("MARQUEE_OMDB_URL") {
            config.search.base_url = url;
        }

        if let Ok(timeout) = std::env::var("MARQUEE_REQUEST_TIMEOUT_SECS")
            && let Ok(seconds) = timeout.parse::<u64>()
        {
            config.search.request_timeout = Duration::from_secs(seconds);
        }

        if let Ok(capacity) = std::env::var("MARQUEE_CACHE_CAPACITY")
            && let Ok(count) = capacity.parse::<usize>()
        {
            config.search.cache_capacity = count;
        }

        if let Ok(demo) = std::env::var("MARQUEE_USE_DEMO_DATA") {
            config.search.development_catalog = demo.parse().unwrap_or(false);
        }

        if let Ok(debounce) = std::env::var("MARQUEE_DEBOUNCE_MS")
            && let Ok(millis) = debounce.parse::<u64>()
        {
            config.session.debounce = Duration::from_millis(millis);
        }

        if let Ok(port) = std::env::var("MARQUEE_WEB_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            config.web.port = port;
        }

        if let Ok(path) = std::env::var("MARQUEE_LOCALE_FILE") {
            config.locale_file = Some(PathBuf::from(path));
        }

        config
    }

    /// Creates a configuration backed by the offline development catalog.
    pub fn for_development() -> Self {
        Self {
            search: SearchConfig {
                development_catalog: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Checks the settings a session cannot run without.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Bad endpoint, missing API key for the
    ///   remote provider, or a zero cache capacity
    pub fn validate(&self) -> Result<(), MarqueeError> {
        if self.search.cache_capacity == 0 {
            return Err(MarqueeError::Configuration {
                reason: "cache capacity must be at least 1".to_string(),
            });
        }

        if !self.search.development_catalog {
            self.search.endpoint()?;
            self.search.require_api_key()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.search.base_url, "https://www.omdbapi.com/");
        assert_eq!(config.search.cache_capacity, 256);
        assert_eq!(config.session.debounce, Duration::from_millis(800));
        assert_eq!(config.session.placeholder_tiles, 9);
        assert_eq!(config.web.port, 3000);
        assert!(config.search.api_key.is_none());
        assert!(!config.search.development_catalog);
    }

    #[test]
    fn test_validate_requires_api_key_for_remote_provider() {
        let config = MarqueeConfig::default();
        assert!(matches!(
            config.validate(),
            Err(MarqueeError::Configuration { .. })
        ));

        let mut with_key = MarqueeConfig::default();
        with_key.search.api_key = Some("abc123".to_string());
        assert!(with_key.validate().is_ok());

        let mut blank_key = MarqueeConfig::default();
        blank_key.search.api_key = Some("   ".to_string());
        assert!(blank_key.validate().is_err());
    }

    #[test]
    fn test_development_config_skips_api_key() {
        let config = MarqueeConfig::for_development();
        assert!(config.search.development_catalog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_rejects_non_http_schemes() {
        let mut config = SearchConfig::default();
        assert!(config.endpoint().is_ok());

        config.base_url = "ftp://example.com/".to_string();
        assert!(config.endpoint().is_err());

        config.base_url = "not a url".to_string();
        assert!(config.endpoint().is_err());
    }

    #[test]
    fn test_zero_cache_capacity_is_rejected() {
        let mut config = MarqueeConfig::for_development();
        config.search.cache_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("OMDB_API_KEY", "envkey");
            std::env::set_var("MARQUEE_OMDB_URL", "http://localhost:9999/");
            std::env::set_var("MARQUEE_CACHE_CAPACITY", "32");
            std::env::set_var("MARQUEE_DEBOUNCE_MS", "250");
            std::env::set_var("MARQUEE_WEB_PORT", "not-a-port");
        }

        let config = MarqueeConfig::from_env();

        assert_eq!(config.search.api_key.as_deref(), Some("envkey"));
        assert_eq!(config.search.base_url, "http://localhost:9999/");
        assert_eq!(config.search.cache_capacity, 32);
        assert_eq!(config.session.debounce, Duration::from_millis(250));
        assert_eq!(config.web.port, 3000);

        unsafe {
            std::env::remove_var("OMDB_API_KEY");
            std::env::remove_var("MARQUEE_OMDB_URL");
            std::env::remove_var("MARQUEE_CACHE_CAPACITY");
            std::env::remove_var("MARQUEE_DEBOUNCE_MS");
            std::env::remove_var("MARQUEE_WEB_PORT");
        }
    }
}
