//! Account service.

use std::sync::Arc;

use super::paths;
use crate::client::{ApiResponse, ClientInner};
use crate::models::AccountSummary;
use crate::Result;

/// Service for account information.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: trading212_rs::Trading212Client) -> trading212_rs::Result<()> {
/// let summary = client.account().summary().await?;
/// println!("{:?} {:?}", summary.data.currency, summary.data.total_value);
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the cash, investments and total value of the account.
    pub async fn summary(&self) -> Result<ApiResponse<AccountSummary>> {
        let response = self.inner.get(paths::ACCOUNT_SUMMARY).await?;
        ApiResponse::from_response(response).await
    }
}
