//! Async HTTP engine for the Trading 212 API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::api::{
    AccountService, HistoryService, InstrumentsService, OrdersService, PiesService,
    PositionsService,
};
use crate::auth::Credentials;
use crate::{ApiErrorKind, Environment, Error, Result};

use super::config::{apply_config, ClientConfig};

/// The main client for interacting with the Trading 212 API.
///
/// The client is cheap to clone; clones share one connection pool.
/// Resources are reached through service accessors that return small
/// service structs.
///
/// # Example
///
/// ```no_run
/// use trading212_rs::{Credentials, Environment, Trading212Client};
///
/// # async fn example() -> trading212_rs::Result<()> {
/// let client = Trading212Client::new(
///     Credentials::new("api-key", "api-secret"),
///     Environment::Demo,
/// )?;
///
/// let summary = client.account().summary().await?;
/// println!("Total value: {:?}", summary.data.total_value);
///
/// let positions = client.positions().list().await?;
/// println!("{} open positions", positions.data.len());
/// # Ok(())
/// # }
/// ```
pub struct Trading212Client {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) environment: Environment,
    pub(crate) config: ClientConfig,
}

impl Trading212Client {
    /// Create a client for the given environment with default configuration.
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::with_config(credentials, environment, ClientConfig::default())
    }

    /// Create a client with custom transport configuration.
    pub fn with_config(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = Url::parse(environment.api_base_url())?;
        Self::with_base_url(credentials, environment, base_url, config)
    }

    /// Create a client against an arbitrary origin, e.g. a local mock server.
    #[doc(hidden)]
    pub fn with_base_url(
        credentials: Credentials,
        environment: Environment,
        base_url: Url,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = apply_config!(reqwest::Client::builder(), &config)
            .default_headers(default_headers(&credentials)?)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                environment,
                config,
            }),
        })
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the instruments metadata service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the positions service.
    pub fn positions(&self) -> PositionsService {
        PositionsService::new(self.inner.clone())
    }

    /// Get the history service.
    pub fn history(&self) -> HistoryService {
        HistoryService::new(self.inner.clone())
    }

    /// Get the pies service.
    ///
    /// The pies endpoints are deprecated; every call logs a warning.
    pub fn pies(&self) -> PiesService {
        PiesService::new(self.inner.clone())
    }

    /// Get the environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.inner.environment
    }

    /// Release the client.
    ///
    /// The connection pool is freed once the last clone (including any
    /// service or stream still holding it) is dropped.
    pub fn close(self) {
        tracing::debug!(environment = %self.inner.environment, "closing client");
    }
}

/// Headers attached to every request, computed once per client.
pub(crate) fn default_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, credentials.header_value()?);
    Ok(headers)
}

/// Resolve a path, which may carry its own query string, against a base URL.
pub(crate) fn resolve(base_url: &Url, path: &str) -> Result<Url> {
    Ok(base_url.join(path)?)
}

impl ClientInner {
    /// Make a GET request.
    pub(crate) async fn get(&self, path: &str) -> Result<reqwest::Response> {
        self.send::<(), ()>(Method::GET, path, None, None).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<reqwest::Response> {
        self.send::<Q, ()>(Method::GET, path, Some(query), None).await
    }

    /// Make a POST request.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.send::<(), B>(Method::POST, path, None, Some(body)).await
    }

    /// Make a PUT request.
    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        self.send::<(), B>(Method::PUT, path, None, Some(body)).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        self.send::<(), ()>(Method::DELETE, path, None, None).await
    }

    async fn send<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = resolve(&self.base_url, path)?;
        tracing::debug!(%method, path, "sending request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(&method, path, response).await
    }

    /// Classify the status; on failure the body text becomes the error message.
    async fn handle_response(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status().as_u16();
        tracing::debug!(%method, path, status, "received response");

        let Some(kind) = ApiErrorKind::from_status(status) else {
            return Ok(response);
        };

        let message = response.text().await.unwrap_or_default();
        tracing::warn!(%method, path, status, %kind, "request failed");
        Err(Error::Api {
            kind,
            status,
            message,
        })
    }
}

impl Clone for Trading212Client {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Trading212Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trading212Client")
            .field("environment", &self.inner.environment)
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_path() {
        let base = Url::parse("https://demo.trading212.com").unwrap();
        let url = resolve(&base, "/api/v0/equity/positions").unwrap();
        assert_eq!(url.as_str(), "https://demo.trading212.com/api/v0/equity/positions");
    }

    #[test]
    fn test_resolve_keeps_locator_query() {
        let base = Url::parse("https://live.trading212.com").unwrap();
        let url = resolve(&base, "/api/v0/equity/history/orders?limit=20&cursor=999").unwrap();
        assert_eq!(url.path(), "/api/v0/equity/history/orders");
        assert_eq!(url.query(), Some("limit=20&cursor=999"));
    }

    #[test]
    fn test_client_debug_hides_credentials() {
        let client = Trading212Client::new(
            Credentials::new("key", "very-secret"),
            Environment::Live,
        )
        .unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("live.trading212.com"));
        assert!(!debug.contains("very-secret"));
        assert_eq!(client.environment(), Environment::Live);
    }
}
