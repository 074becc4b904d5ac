//! Authentication for the Trading 212 Public API.
//!
//! The API uses HTTP Basic authentication: every request carries
//! `Authorization: Basic base64(key:secret)`. The header value is derived
//! once, when the client is built, and reused for the client's lifetime.
//!
//! ```
//! use trading212_rs::Credentials;
//!
//! let credentials = Credentials::new("your-api-key", "your-api-secret");
//! assert_eq!(credentials.api_key(), "your-api-key");
//! ```

mod credentials;

pub use credentials::Credentials;
