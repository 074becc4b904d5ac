//! Client configuration options.

use std::time::Duration;

use crate::{Error, Result};

/// Transport configuration for the Trading 212 client.
///
/// The options are handed to the underlying `reqwest` builder unchanged and
/// apply equally to the async and blocking clients. The client itself never
/// retries or times out on its own.
///
/// # Example
///
/// ```
/// use trading212_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// Proxy URL applied to all requests
    pub proxy: Option<String>,
    /// How long idle pooled connections are kept
    pub pool_idle_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: None,
            user_agent: format!("trading212-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            proxy: None,
            pool_idle_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route all requests through a proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set the idle timeout for pooled connections.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    pub(crate) fn proxy(&self) -> Result<Option<reqwest::Proxy>> {
        self.proxy
            .as_deref()
            .map(|url| {
                reqwest::Proxy::all(url)
                    .map_err(|e| Error::InvalidInput(format!("Invalid proxy '{url}': {e}")))
            })
            .transpose()
    }
}

/// Applies a [`ClientConfig`] to either flavour of `reqwest` builder.
macro_rules! apply_config {
    ($builder:expr, $config:expr) => {{
        let config = $config;
        let mut builder = $builder
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            // A 3xx is classified like any other non-2xx status
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.pool_idle_timeout {
            builder = builder.pool_idle_timeout(timeout);
        }
        if let Some(proxy) = config.proxy()? {
            builder = builder.proxy(proxy);
        }
        builder
    }};
}

pub(crate) use apply_config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.connect_timeout.is_none());
        assert!(config.proxy.is_none());
        assert!(config.user_agent.starts_with("trading212-rs/"));
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(2))
            .with_pool_idle_timeout(Duration::from_secs(90))
            .with_user_agent("bot/2.0")
            .with_proxy("http://127.0.0.1:8080");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.pool_idle_timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.user_agent, "bot/2.0");
        assert!(config.proxy().unwrap().is_some());
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let config = ClientConfig::new().with_proxy("not a url");
        assert!(matches!(config.proxy(), Err(Error::InvalidInput(_))));
    }
}
