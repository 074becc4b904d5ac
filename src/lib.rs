//! # trading212-rs
//!
//! A typed Rust client for the Trading 212 Public API.
//!
//! The crate covers the equity REST surface: account summary, instrument
//! metadata, orders, positions, history with CSV exports, and the
//! deprecated pies endpoints. Every call returns an [`ApiResponse`] that
//! carries the parsed payload together with the rate-limit headers and
//! status code of the same response.
//!
//! ## Features
//!
//! - **Authentication**: API key and secret sent as HTTP Basic credentials
//! - **Typed models**: serde models with `Decimal` money and `chrono` times
//! - **Error taxonomy**: every failed status maps to one [`ApiErrorKind`]
//! - **Pagination**: history listings as a lazy `Stream` or `Iterator`
//! - **Async and blocking**: identical surfaces over `reqwest`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trading212_rs::{Credentials, Environment, Trading212Client};
//!
//! #[tokio::main]
//! async fn main() -> trading212_rs::Result<()> {
//!     let client = Trading212Client::new(
//!         Credentials::new("api-key", "api-secret"),
//!         Environment::Demo,
//!     )?;
//!
//!     let summary = client.account().summary().await?;
//!     println!("Total value: {:?}", summary.data.total_value);
//!     println!("Calls left: {:?}", summary.rate_limit.remaining);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Walking history
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use trading212_rs::api::HistoryQuery;
//! use trading212_rs::{Credentials, Environment, Trading212Client};
//!
//! #[tokio::main]
//! async fn main() -> trading212_rs::Result<()> {
//!     let client = Trading212Client::new(
//!         Credentials::new("api-key", "api-secret"),
//!         Environment::Live,
//!     )?;
//!
//!     let mut orders = client.history().orders_stream(HistoryQuery::new().limit(50));
//!     while let Some(item) = orders.next().await {
//!         let item = item?;
//!         if let (Some(order), Some(fill)) = (item.order, item.fill) {
//!             println!("{:?} filled at {:?}", order.ticker, fill.price);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling errors
//!
//! ```rust,no_run
//! use trading212_rs::{ApiErrorKind, Error, OrderId};
//!
//! # async fn example(client: trading212_rs::Trading212Client) {
//! match client.orders().get(OrderId::new(42)).await {
//!     Ok(order) => println!("{:?}", order.data.status),
//!     Err(Error::Api { kind: ApiErrorKind::NotFound, .. }) => println!("already gone"),
//!     Err(e) if e.is_retryable() => println!("try again later: {e}"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Credentials;
pub use client::{ApiResponse, ClientConfig, RateLimitInfo, Trading212Client};
pub use error::{ApiErrorKind, Error, Result};
pub use models::{Environment, OrderId, PaginatedResponse, PieId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use trading212_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{HistoryQuery, TransactionsQuery};
    pub use crate::auth::Credentials;
    pub use crate::client::{ApiResponse, ClientConfig, RateLimitInfo, Trading212Client};
    pub use crate::error::{ApiErrorKind, Error, Result};
    pub use crate::models::{
        // Primitives
        Environment, OrderId, PieId,
        // Enums
        OrderSide, OrderStatus, OrderType, TimeValidity, TransactionType,
        // Models
        AccountSummary, Exchange, HistoricalOrder, HistoryDividendItem, HistoryTransactionItem,
        Order, PaginatedResponse, Position, TradableInstrument,
        // Requests
        LimitOrderRequest, MarketOrderRequest, PublicReportRequest, StopLimitOrderRequest,
        StopOrderRequest,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Demo.api_base_url(), "https://demo.trading212.com");
        assert_eq!(Environment::Live.api_base_url(), "https://live.trading212.com");
    }

    #[test]
    fn test_client_construction() {
        let client = Trading212Client::new(Credentials::new("key", "secret"), Environment::Demo)
            .unwrap();
        assert_eq!(client.environment(), Environment::Demo);

        let clone = client.clone();
        assert_eq!(clone.environment(), Environment::Demo);
        client.close();
    }
}
