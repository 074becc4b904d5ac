//! API key/secret pair and the Basic authorization header derived from it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// An immutable Trading 212 API key and secret.
///
/// The secret is never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and its secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The public half of the key pair.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The `Authorization` header value, `Basic <base64(key:secret)>`.
    pub fn basic_auth_value(&self) -> SecretString {
        let raw = format!("{}:{}", self.api_key, self.api_secret.expose_secret());
        SecretString::from(format!("Basic {}", BASE64.encode(raw.as_bytes())))
    }

    /// Build the header value, marked sensitive so transports do not log it.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(self.basic_auth_value().expose_secret())
            .map_err(|_| Error::InvalidInput("Invalid credentials format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_value() {
        let credentials = Credentials::new("test-key", "test-secret");
        // base64("test-key:test-secret")
        assert_eq!(
            credentials.basic_auth_value().expose_secret(),
            "Basic dGVzdC1rZXk6dGVzdC1zZWNyZXQ="
        );
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let credentials = Credentials::new("test-key", "test-secret");
        let value = credentials.header_value().unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "Basic dGVzdC1rZXk6dGVzdC1zZWNyZXQ=");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("test-key", "super-secret");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("test-key"));
        assert!(!debug.contains("super-secret"));
    }
}
