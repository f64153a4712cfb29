//! Configuration management
//!
//! The page access token is resolved once, before any client exists:
//! an explicitly supplied value wins, the `PAGE_ACCESS_TOKEN` environment
//! variable is the fallback, and anything else is a configuration error.

use std::time::Duration;

use crate::error::{MessengerError, Result};

/// Environment variable holding the page access token.
pub const PAGE_ACCESS_TOKEN_VAR: &str = "PAGE_ACCESS_TOKEN";

/// Default Graph API base URL.
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com/v3.1";

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Immutable client configuration.
///
/// Built once at startup and handed to [`MessengerApi::new`](crate::MessengerApi::new).
#[derive(Debug, Clone)]
pub struct Config {
    /// Page access token authenticating every Graph API call.
    pub page_access_token: String,

    /// Graph API base URL (overridable for tests and API version bumps).
    pub graph_url: String,

    /// Request timeout applied to the underlying HTTP client.
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration from an explicit page access token.
    pub fn new(page_access_token: impl Into<String>) -> Result<Self> {
        let page_access_token = page_access_token.into();
        if page_access_token.trim().is_empty() {
            return Err(MessengerError::Config(
                "page access token must not be empty".to_string(),
            ));
        }

        Ok(Self {
            page_access_token,
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            timeout: default_timeout(),
        })
    }

    /// Load the page access token from the `PAGE_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(PAGE_ACCESS_TOKEN_VAR).map_err(|_| {
            MessengerError::Config(format!("{PAGE_ACCESS_TOKEN_VAR} not set"))
        })?;
        Self::new(token)
    }

    /// Resolve a configuration from an optional injected token, falling back
    /// to the environment.
    pub fn resolve(page_access_token: Option<String>) -> Result<Self> {
        match page_access_token {
            Some(token) => Self::new(token),
            None => Self::from_env(),
        }
    }

    /// Override the Graph API base URL.
    pub fn with_graph_url(mut self, graph_url: impl Into<String>) -> Self {
        self.graph_url = graph_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new("EAAtoken").unwrap();
        assert_eq!(config.page_access_token, "EAAtoken");
        assert_eq!(config.graph_url, DEFAULT_GRAPH_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_empty_token_rejected() {
        let result = Config::new("");
        assert!(matches!(result, Err(MessengerError::Config(_))));

        let result = Config::new("   ");
        assert!(matches!(result, Err(MessengerError::Config(_))));
    }

    // Single test so the shared PAGE_ACCESS_TOKEN variable is not touched
    // from parallel test threads.
    #[test]
    fn test_env_resolution() {
        unsafe {
            std::env::set_var(PAGE_ACCESS_TOKEN_VAR, "env-token");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.page_access_token, "env-token");

        // An injected token wins over the environment.
        let config = Config::resolve(Some("explicit-token".to_string())).unwrap();
        assert_eq!(config.page_access_token, "explicit-token");

        // Without an injected token, resolve falls back to the environment.
        let config = Config::resolve(None).unwrap();
        assert_eq!(config.page_access_token, "env-token");

        unsafe {
            std::env::remove_var(PAGE_ACCESS_TOKEN_VAR);
        }

        let result = Config::from_env();
        assert!(matches!(result, Err(MessengerError::Config(_))));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::new("token")
            .unwrap()
            .with_graph_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.graph_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
