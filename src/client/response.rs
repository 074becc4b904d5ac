//! Response envelope and rate-limit metadata.
//!
//! Every non-paginating call returns an [`ApiResponse`]: the parsed payload,
//! the rate-limit snapshot read from the same response's headers, and the
//! HTTP status code.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::Result;

const LIMIT: &str = "x-ratelimit-limit";
const PERIOD: &str = "x-ratelimit-period";
const REMAINING: &str = "x-ratelimit-remaining";
const RESET: &str = "x-ratelimit-reset";
const USED: &str = "x-ratelimit-used";

/// Rate-limit snapshot taken from one response.
///
/// A header that is missing or not an integer is `None`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed per period
    pub limit: Option<i64>,
    /// Period length in seconds
    pub period: Option<i64>,
    /// Requests left in the current period
    pub remaining: Option<i64>,
    /// Unix timestamp (seconds) at which the period resets
    pub reset: Option<i64>,
    /// Requests used in the current period
    pub used: Option<i64>,
}

impl RateLimitInfo {
    /// Parse the `x-ratelimit-*` headers.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{HeaderMap, HeaderValue};
    /// use trading212_rs::RateLimitInfo;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("9"));
    /// headers.insert("x-ratelimit-limit", HeaderValue::from_static("ten"));
    ///
    /// let info = RateLimitInfo::from_headers(&headers);
    /// assert_eq!(info.remaining, Some(9));
    /// assert_eq!(info.limit, None);
    /// ```
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let int = |key: &str| {
            headers
                .get(key)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<i64>().ok())
        };

        Self {
            limit: int(LIMIT),
            period: int(PERIOD),
            remaining: int(REMAINING),
            reset: int(RESET),
            used: int(USED),
        }
    }

    /// Returns `true` if the server reported no requests left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// The reset time as a timestamp, if reported.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        self.reset.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// A successful API call: payload, rate-limit snapshot and status code.
///
/// `T` is a single record, a `Vec`, a
/// [`PaginatedResponse`](crate::models::PaginatedResponse), or `()` for
/// operations without a body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// Parsed payload
    pub data: T,
    /// Rate limits reported with this response
    pub rate_limit: RateLimitInfo,
    /// HTTP status code
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// Assemble an envelope.
    pub fn new(data: T, rate_limit: RateLimitInfo, status_code: u16) -> Self {
        Self {
            data,
            rate_limit,
            status_code,
        }
    }

    /// Discard the metadata and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            status_code: self.status_code,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Build an envelope from a successful response with a JSON body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Result<Self> {
        let rate_limit = RateLimitInfo::from_headers(response.headers());
        let status_code = response.status().as_u16();
        let bytes = response.bytes().await?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Self::new(data, rate_limit, status_code))
    }

    /// Blocking counterpart of [`from_response`](Self::from_response).
    #[cfg(feature = "blocking")]
    pub(crate) fn from_blocking_response(response: reqwest::blocking::Response) -> Result<Self> {
        let rate_limit = RateLimitInfo::from_headers(response.headers());
        let status_code = response.status().as_u16();
        let bytes = response.bytes()?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Self::new(data, rate_limit, status_code))
    }
}

impl ApiResponse<()> {
    /// Build an envelope for an operation whose body is ignored.
    pub(crate) fn empty(headers: &HeaderMap, status: reqwest::StatusCode) -> Self {
        Self::new((), RateLimitInfo::from_headers(headers), status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_parse_all_rate_limit_headers() {
        let info = RateLimitInfo::from_headers(&headers(&[
            ("x-ratelimit-limit", "10"),
            ("x-ratelimit-period", "60"),
            ("x-ratelimit-remaining", "9"),
            ("x-ratelimit-reset", "1700000000"),
            ("x-ratelimit-used", "1"),
        ]));

        assert_eq!(
            info,
            RateLimitInfo {
                limit: Some(10),
                period: Some(60),
                remaining: Some(9),
                reset: Some(1_700_000_000),
                used: Some(1),
            }
        );
        assert!(!info.is_exhausted());
        assert_eq!(info.reset_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_missing_headers_are_none() {
        let info = RateLimitInfo::from_headers(&HeaderMap::new());
        assert_eq!(info, RateLimitInfo::default());
        assert!(info.reset_at().is_none());
    }

    #[test]
    fn test_non_numeric_headers_are_none() {
        let info = RateLimitInfo::from_headers(&headers(&[
            ("x-ratelimit-limit", "abc"),
            ("x-ratelimit-remaining", "0"),
            ("x-ratelimit-used", "1.5"),
        ]));
        assert_eq!(info.limit, None);
        assert_eq!(info.remaining, Some(0));
        assert_eq!(info.used, None);
        assert!(info.is_exhausted());
    }

    #[test]
    fn test_header_names_case_insensitive() {
        let info = RateLimitInfo::from_headers(&headers(&[("X-RateLimit-Period", "5")]));
        assert_eq!(info.period, Some(5));
    }

    #[test]
    fn test_envelope_map_keeps_metadata() {
        let rate_limit = RateLimitInfo {
            remaining: Some(3),
            ..Default::default()
        };
        let response = ApiResponse::new(vec![1, 2, 3], rate_limit, 200);
        let mapped = response.map(|v| v.len());
        assert_eq!(mapped.data, 3);
        assert_eq!(mapped.rate_limit.remaining, Some(3));
        assert_eq!(mapped.status_code, 200);
        assert_eq!(mapped.into_data(), 3);
    }

    #[test]
    fn test_empty_envelope() {
        let response = ApiResponse::empty(
            &headers(&[("x-ratelimit-remaining", "4")]),
            reqwest::StatusCode::OK,
        );
        assert_eq!(response.data, ());
        assert_eq!(response.status_code, 200);
        assert_eq!(response.rate_limit.remaining, Some(4));
    }
}
