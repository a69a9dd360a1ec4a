//! Configuration for the normalizer and the gateway client.
//!
//! Both structs deserialize from JSON with every field optional, falling
//! back to the defaults below.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default lifetime of a broker universe snapshot: one hour.
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(60 * 60);

/// Default gateway address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Normalizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizerConfig {
    /// How long a universe snapshot stays valid, in whole seconds.
    pub cache_duration_secs: u64,

    /// Aliases applied on top of the built-in table.
    /// Keys are upper-cased when applied; an entry replaces the built-in one.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, Vec<String>>,
}

impl NormalizerConfig {
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }

    /// Set the snapshot lifetime.
    ///
    /// The window is stored in whole seconds. A fractional part rounds up,
    /// so a non-zero duration never turns into an always-stale zero window.
    /// Use [`SymbolNormalizer::set_cache_duration`](crate::SymbolNormalizer::set_cache_duration)
    /// for sub-second precision.
    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.cache_duration_secs = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);
        self
    }

    /// Add or replace one alias entry.
    pub fn with_alias(mut self, key: &str, candidates: &[&str]) -> Self {
        self.aliases.insert(
            key.to_string(),
            candidates.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            cache_duration_secs: DEFAULT_CACHE_DURATION.as_secs(),
            aliases: HashMap::new(),
        }
    }
}

/// Connection settings for the trading gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayConfig {
    /// Base URL without a trailing slash, e.g. "http://localhost:5000".
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Session token obtained from the gateway's connect call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizer_defaults() {
        let config = NormalizerConfig::default();
        assert_eq!(config.cache_duration(), Duration::from_secs(3600));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_normalizer_from_partial_json() {
        let config = NormalizerConfig::from_json(
            r#"{ "aliases": { "natgas": ["XNGUSD", "NGAS"] } }"#,
        )
        .unwrap();
        assert_eq!(config.cache_duration_secs, 3600);
        assert_eq!(
            config.aliases.get("natgas"),
            Some(&vec!["XNGUSD".to_string(), "NGAS".to_string()])
        );
    }

    #[test]
    fn test_normalizer_builder() {
        let config = NormalizerConfig::default()
            .with_cache_duration(Duration::from_secs(90))
            .with_alias("COPPER", &["XCUUSD"]);
        assert_eq!(config.cache_duration_secs, 90);
        assert_eq!(config.aliases["COPPER"], vec!["XCUUSD".to_string()]);
    }

    #[test]
    fn test_cache_duration_rounds_fractional_seconds_up() {
        let config = NormalizerConfig::default().with_cache_duration(Duration::from_millis(1500));
        assert_eq!(config.cache_duration_secs, 2);
        assert_eq!(config.cache_duration(), Duration::from_secs(2));

        let config = NormalizerConfig::default().with_cache_duration(Duration::from_millis(500));
        assert_eq!(config.cache_duration_secs, 1);

        let config = NormalizerConfig::default().with_cache_duration(Duration::ZERO);
        assert_eq!(config.cache_duration_secs, 0);
    }

    #[test]
    fn test_gateway_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_gateway_from_json() {
        let config = GatewayConfig::from_json(
            r#"{ "baseUrl": "http://10.0.0.5:5000", "token": "abc" }"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.token.as_deref(), Some("abc"));
    }
}
