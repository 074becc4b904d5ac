//! Data models for the Trading 212 API.
//!
//! All models map lowerCamelCase wire names to snake_case fields through
//! `#[serde(rename_all = "camelCase")]`. Response models tolerate missing
//! and unknown fields; request models omit unset optional fields.
//!
//! - [`primitives`] - Identifiers and the [`Environment`]
//! - [`enums`] - Enumeration types for statuses, order types, etc.
//! - [`account`] - Account summary
//! - [`instrument`] - Instrument and exchange metadata
//! - [`order`] - Orders, fills and order requests
//! - [`position`] - Open positions
//! - [`history`] - Historical orders, dividends, transactions and exports
//! - [`pie`] - Pies (deprecated endpoints)
//! - [`pagination`] - Cursor-paginated page envelope

pub mod primitives;
pub mod enums;
pub mod account;
pub mod instrument;
pub mod order;
pub mod position;
pub mod history;
pub mod pie;
pub mod pagination;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use instrument::*;
pub use order::*;
pub use position::*;
pub use history::*;
pub use pie::*;
pub use pagination::*;
