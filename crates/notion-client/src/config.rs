//! Client configuration
//!
//! Settings are read from the environment:
//!
//! | variable | default |
//! |---|---|
//! | `NOTION_TOKEN` | required |
//! | `NOTION_API_BASE` | `https://api.notion.com/v1` |
//! | `NOTION_VERSION` | `2022-06-28` |

use std::fmt;
use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const TOKEN_ENV: &str = "NOTION_TOKEN";
pub const BASE_URL_ENV: &str = "NOTION_API_BASE";
pub const VERSION_ENV: &str = "NOTION_VERSION";

/// Connection settings for [`crate::NotionClient`]
#[derive(Clone)]
pub struct NotionConfig {
    /// Integration token sent as `Authorization: Bearer <token>`
    pub token: String,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Value of the `Notion-Version` header
    pub notion_version: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl NotionConfig {
    /// Create a configuration with default endpoint, version and timeout.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let token = get(TOKEN_ENV).ok_or(Error::MissingToken)?;
        let mut config = Self::new(token);
        if let Some(base_url) = get(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Some(version) = get(VERSION_ENV) {
            config.notion_version = version;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("notion_version", &self.notion_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NotionConfig::from_lookup(lookup(&[(TOKEN_ENV, "secret")])).unwrap();
        assert_eq!(config.token, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.notion_version, DEFAULT_NOTION_VERSION);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_missing_token() {
        let result = NotionConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(Error::MissingToken)));
    }

    #[test]
    fn test_blank_token_is_missing() {
        let result = NotionConfig::from_lookup(lookup(&[(TOKEN_ENV, "  ")]));
        assert!(matches!(result, Err(Error::MissingToken)));
    }

    #[test]
    fn test_overrides() {
        let config = NotionConfig::from_lookup(lookup(&[
            (TOKEN_ENV, "secret"),
            (BASE_URL_ENV, "http://localhost:1234/"),
            (VERSION_ENV, "2025-09-03"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.notion_version, "2025-09-03");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = NotionConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
