//! API service modules for Trading 212 endpoints.
//!
//! Each service binds a fixed set of `/api/v0/equity` paths to typed
//! request and response models. Services are obtained from
//! [`Trading212Client`](crate::Trading212Client) and share its connection
//! pool.

mod account;
mod history;
mod instruments;
mod orders;
pub(crate) mod paths;
mod pies;
mod positions;

pub use account::AccountService;
pub use history::{HistoryQuery, HistoryService, TransactionsQuery};
pub use instruments::InstrumentsService;
pub use orders::OrdersService;
pub use pies::PiesService;
pub use positions::PositionsService;

pub(crate) use pies::warn_deprecated;
