//! Blocking client for the Trading 212 API.
//!
//! Mirrors [`Trading212Client`](crate::Trading212Client) call for call, with
//! every request occupying the calling thread. Status classification, rate
//! limit parsing, the response envelope and the pagination protocol are the
//! same code the async client uses.
//!
//! Do not call this client from inside an async runtime; use the async
//! client there.
//!
//! # Example
//!
//! ```no_run
//! use trading212_rs::blocking::Trading212Client;
//! use trading212_rs::{Credentials, Environment};
//!
//! # fn example() -> trading212_rs::Result<()> {
//! let client = Trading212Client::new(
//!     Credentials::new("api-key", "api-secret"),
//!     Environment::Demo,
//! )?;
//!
//! let positions = client.positions().list()?;
//! for position in &positions.data {
//!     println!("{:?} x {:?}", position.ticker(), position.quantity);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod paginated;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::auth::Credentials;
use crate::client::{apply_config, default_headers, resolve, ClientConfig};
use crate::{ApiErrorKind, Environment, Error, Result};

pub use api::{
    AccountService, HistoryService, InstrumentsService, OrdersService, PiesService,
    PositionsService,
};
pub use paginated::PaginatedIter;

/// Blocking counterpart of [`crate::Trading212Client`].
#[derive(Clone)]
pub struct Trading212Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    http: reqwest::blocking::Client,
    base_url: Url,
    environment: Environment,
    config: ClientConfig,
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
        let http = apply_config!(reqwest::blocking::Client::builder(), &config)
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

    /// Get the pies service (deprecated endpoints).
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
    /// service or iterator still holding it) is dropped.
    pub fn close(self) {
        tracing::debug!(environment = %self.inner.environment, "closing blocking client");
    }
}

impl std::fmt::Debug for Trading212Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Trading212Client")
            .field("environment", &self.inner.environment)
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

type Response = reqwest::blocking::Response;

impl ClientInner {
    pub(crate) fn get(&self, path: &str) -> Result<Response> {
        self.send::<(), ()>(Method::GET, path, None, None)
    }

    pub(crate) fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        self.send::<Q, ()>(Method::GET, path, Some(query), None)
    }

    pub(crate) fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.send::<(), B>(Method::POST, path, None, Some(body))
    }

    pub(crate) fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.send::<(), B>(Method::PUT, path, None, Some(body))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Response> {
        self.send::<(), ()>(Method::DELETE, path, None, None)
    }

    fn send<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = resolve(&self.base_url, path)?;
        tracing::debug!(%method, path, "sending request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        tracing::debug!(%method, path, status, "received response");

        let Some(kind) = ApiErrorKind::from_status(status) else {
            return Ok(response);
        };

        let message = response.text().unwrap_or_default();
        tracing::warn!(%method, path, status, %kind, "request failed");
        Err(Error::Api {
            kind,
            status,
            message,
        })
    }
}
