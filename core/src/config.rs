//! Client configuration.
//!
//! A [`ClientConfig`] is an explicit value handed to
//! [`DuprClient::new`](crate::DuprClient::new); there is no global state.
//! Defaults target the production service. [`ClientConfig::from_env`] layers
//! `DUPR_*` environment variables on top of the defaults.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://backend.mydupr.com";
pub const DEFAULT_VERSION: &str = "v1.0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BEARER_TOKEN: &str = "DUPR_BEARER_TOKEN";
pub const ENV_BASE_URL: &str = "DUPR_BASE_URL";
pub const ENV_VERSION: &str = "DUPR_API_VERSION";
pub const ENV_TIMEOUT_SECS: &str = "DUPR_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub bearer_token: Option<String>,
    pub base_url: String,
    pub default_version: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_version: DEFAULT_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `DUPR_*` variables present in the
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(token) = lookup(ENV_BEARER_TOKEN).filter(|t| !t.is_empty()) {
            config.bearer_token = Some(token);
        }
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(version) = lookup(ENV_VERSION) {
            config.default_version = version;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let parsed = secs.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_TIMEOUT_SECS,
                value: secs.clone(),
            })?;
            config.timeout = Duration::from_secs(parsed);
        }

        Ok(config)
    }

    /// An empty token means no token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.default_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Checks the values and normalizes `base_url` (no trailing slash) and
    /// `default_version` (no surrounding slashes).
    pub(crate) fn validate(mut self) -> Result<Self, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        self.bearer_token = self.bearer_token.filter(|t| !t.is_empty());
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self.default_version = self.default_version.trim_matches('/').to_string();

        if self.default_version.is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(self)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("default_version", &self.default_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_target_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://backend.mydupr.com");
        assert_eq!(config.default_version, "v1.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn builder_overrides_every_field() {
        let config = ClientConfig::new()
            .with_bearer_token("custom_token")
            .with_base_url("https://custom.api.com")
            .with_version("v2.0")
            .with_timeout(Duration::from_secs(60));
        assert_eq!(config.bearer_token.as_deref(), Some("custom_token"));
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.default_version, "v2.0");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_BEARER_TOKEN, "env_token"),
            (ENV_BASE_URL, "http://localhost:3000"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.bearer_token.as_deref(), Some("env_token"));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.default_version, DEFAULT_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_env_token_is_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_BEARER_TOKEN, "")])).unwrap();
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn empty_builder_token_is_ignored() {
        let config = ClientConfig::new().with_bearer_token("");
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn bad_env_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { name: ENV_TIMEOUT_SECS, .. }));
    }

    #[test]
    fn validate_normalizes_slashes() {
        let config = ClientConfig::new()
            .with_base_url("https://example.test/")
            .with_version("/v1.0/")
            .validate()
            .unwrap();
        assert_eq!(config.base_url, "https://example.test");
        assert_eq!(config.default_version, "v1.0");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let err = ClientConfig::new().with_base_url("not a url").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));

        let err = ClientConfig::new().with_base_url("ftp://example.test").validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));

        let err = ClientConfig::new().with_version("/").validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyVersion));

        let err = ClientConfig::new().with_timeout(Duration::ZERO).validate().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", ClientConfig::new().with_bearer_token("secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
