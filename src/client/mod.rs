//! HTTP client and service layer for the Trading 212 API.
//!
//! This module provides the async entry point [`Trading212Client`], the
//! response envelope [`ApiResponse`] and the paginated [`PaginatedStream`].
//! A blocking mirror lives in [`crate::blocking`].
//!
//! # Example
//!
//! ```no_run
//! use trading212_rs::{Credentials, Environment, Trading212Client};
//!
//! # async fn example() -> trading212_rs::Result<()> {
//! let client = Trading212Client::new(
//!     Credentials::new("api-key", "api-secret"),
//!     Environment::Demo,
//! )?;
//!
//! let orders = client.orders().list().await?;
//! println!("{} pending orders, {:?} calls left", orders.data.len(), orders.rate_limit.remaining);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod response;

pub use config::ClientConfig;
pub use http::Trading212Client;
pub use paginated::PaginatedStream;
pub use response::{ApiResponse, RateLimitInfo};

pub(crate) use http::ClientInner;
#[cfg(feature = "blocking")]
pub(crate) use {
    config::apply_config,
    http::{default_headers, resolve},
};
