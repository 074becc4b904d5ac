//! Error types for the Trading 212 API client.
//!
//! Every failed HTTP status is mapped to exactly one [`ApiErrorKind`] and
//! surfaces as [`Error::Api`]. Transport failures (DNS, connection resets,
//! client-side timeouts) are kept apart as [`Error::Http`] and are never
//! reclassified into the status taxonomy.

use thiserror::Error;

/// A specialized `Result` type for Trading 212 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a non-success HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400: the request failed validation.
    Validation,
    /// 401: the API key or secret was rejected.
    Authentication,
    /// 403: the key lacks the scope for this endpoint.
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// 408: the server timed out waiting for the request.
    Timeout,
    /// 429: the rate limit for this endpoint is exhausted.
    RateLimit,
    /// 5xx: the server failed.
    Server,
    /// Any other status outside the 2xx range.
    Unexpected,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    ///
    /// Returns `None` for 2xx statuses, which are not errors.
    ///
    /// # Example
    ///
    /// ```
    /// use trading212_rs::ApiErrorKind;
    ///
    /// assert_eq!(ApiErrorKind::from_status(200), None);
    /// assert_eq!(ApiErrorKind::from_status(429), Some(ApiErrorKind::RateLimit));
    /// assert_eq!(ApiErrorKind::from_status(503), Some(ApiErrorKind::Server));
    /// ```
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(Self::Validation),
            401 => Some(Self::Authentication),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            408 => Some(Self::Timeout),
            429 => Some(Self::RateLimit),
            s if s >= 500 => Some(Self::Server),
            _ => Some(Self::Unexpected),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Validation => "validation error",
            Self::Authentication => "authentication error",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::Timeout => "request timeout",
            Self::RateLimit => "rate limit exceeded",
            Self::Server => "server error",
            Self::Unexpected => "unexpected status",
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The main error type for all Trading 212 API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status.
    ///
    /// `message` is the raw response body, verbatim.
    #[error("API {kind} (status={status}): {message}")]
    Api {
        /// Classification of the status code
        kind: ApiErrorKind,
        /// HTTP status code
        status: u16,
        /// Raw response body text, empty if it could not be read
        message: String,
    },

    /// The transport failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success body could not be decoded into the expected model.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path could not be resolved against the environment base URL.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build the error for a status code, or `None` if the status is a success.
    pub fn from_status(status: u16, body: impl Into<String>) -> Option<Self> {
        ApiErrorKind::from_status(status).map(|kind| Error::Api {
            kind,
            status,
            message: body.into(),
        })
    }

    /// The status classification, if this error came from an HTTP response.
    pub fn kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The HTTP status code, if this error came from an HTTP response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the failure is potentially transient.
    ///
    /// The client never retries on its own; this is advice for callers that
    /// run their own retry loop.
    ///
    /// # Example
    ///
    /// ```
    /// use trading212_rs::Error;
    ///
    /// let err = Error::from_status(429, "Limited: 1 / 5s").unwrap();
    /// assert!(err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api { kind, .. } => matches!(
                kind,
                ApiErrorKind::RateLimit | ApiErrorKind::Server | ApiErrorKind::Timeout
            ),
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.kind(),
            Some(ApiErrorKind::Authentication | ApiErrorKind::Forbidden)
        )
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Returns `true` if the transport gave up waiting, as opposed to the
    /// server answering with HTTP 408.
    pub fn is_transport_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}
