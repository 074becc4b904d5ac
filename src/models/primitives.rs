//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around numeric identifiers
//! so an order id cannot be passed where a pie id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed order ID.
///
/// # Example
///
/// ```
/// use trading212_rs::OrderId;
///
/// let id = OrderId::new(987654321);
/// assert_eq!(id.to_string(), "987654321");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Create a new order ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed pie (bucket) ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieId(i64);

impl PieId {
    /// Create a new pie ID.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric ID.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PieId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Environment configuration for the Trading 212 API.
///
/// Determines which origin requests are sent to: the practice (demo)
/// account or real-money trading.
///
/// # Example
///
/// ```
/// use trading212_rs::Environment;
///
/// let env = Environment::Demo;
/// assert_eq!(env.api_base_url(), "https://demo.trading212.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Practice account with virtual money.
    #[default]
    Demo,
    /// Real-money account.
    Live,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Demo => "https://demo.trading212.com",
            Environment::Live => "https://live.trading212.com",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the demo environment.
    pub fn is_demo(&self) -> bool {
        matches!(self, Environment::Demo)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Demo => write!(f, "demo"),
            Environment::Live => write!(f, "live"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id() {
        let id = OrderId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_pie_id_from() {
        let id: PieId = 7.into();
        assert_eq!(id, PieId::new(7));
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Demo.api_base_url(), "https://demo.trading212.com");
        assert_eq!(Environment::Live.api_base_url(), "https://live.trading212.com");
    }

    #[test]
    fn test_environment_default_and_display() {
        assert_eq!(Environment::default(), Environment::Demo);
        assert_eq!(Environment::Live.to_string(), "live");
        assert_eq!(serde_json::to_string(&Environment::Demo).unwrap(), "\"demo\"");
    }
}
