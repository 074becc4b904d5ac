//! History service: past orders, dividends, transactions and CSV exports.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::paths;
use crate::client::paginated::{paginate, PageSource, PaginatedStream};
use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    EnqueuedReportResponse, HistoricalOrder, HistoryDividendItem, HistoryTransactionItem,
    PaginatedResponse, PublicReportRequest, ReportResponse,
};
use crate::Result;

/// Query parameters for historical orders and dividends.
///
/// # Example
///
/// ```
/// use trading212_rs::api::HistoryQuery;
///
/// let query = HistoryQuery::new().ticker("AAPL_US_EQ").limit(50);
/// assert_eq!(query.limit, Some(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryQuery {
    /// Position in the listing, as returned by an earlier page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<i64>,
    /// Restrict to one ticker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Page size; the server caps it at 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl HistoryQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a cursor.
    pub fn cursor(mut self, cursor: i64) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Restrict to one ticker.
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Streams follow server locators, so a caller cursor is dropped.
    pub(crate) fn without_cursor(mut self) -> Self {
        self.cursor = None;
        self
    }
}

/// Query parameters for historical transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransactionsQuery {
    /// Position in the listing, as returned by an earlier page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Only transactions before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    /// Page size; the server caps it at 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TransactionsQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Only transactions before this time.
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn without_cursor(mut self) -> Self {
        self.cursor = None;
        self
    }
}

/// Service for account history.
///
/// Each listing comes in two forms: a single page wrapped in an
/// [`ApiResponse`], and a `*_stream` variant that walks every page lazily.
///
/// # Example
///
/// ```no_run
/// use futures_util::TryStreamExt;
/// use trading212_rs::api::HistoryQuery;
///
/// # async fn example(client: trading212_rs::Trading212Client) -> trading212_rs::Result<()> {
/// // One page, with rate-limit info
/// let page = client.history().dividends(HistoryQuery::new().limit(20)).await?;
/// println!("{} dividends, more: {}", page.data.items.len(), page.data.has_next_page());
///
/// // Every page
/// let all: Vec<_> = client
///     .history()
///     .dividends_stream(HistoryQuery::new())
///     .try_collect()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct HistoryService {
    inner: Arc<ClientInner>,
}

impl HistoryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one page of historical orders.
    pub async fn orders(
        &self,
        query: HistoryQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoricalOrder>>> {
        let response = self.inner.get_with_query(paths::HISTORY_ORDERS, &query).await?;
        ApiResponse::from_response(response).await
    }

    /// Stream every historical order, page by page.
    pub fn orders_stream(&self, query: HistoryQuery) -> PaginatedStream<HistoricalOrder> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_ORDERS, Some(query.without_cursor())),
        )
    }

    /// Get one page of paid dividends.
    pub async fn dividends(
        &self,
        query: HistoryQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoryDividendItem>>> {
        let response = self.inner.get_with_query(paths::HISTORY_DIVIDENDS, &query).await?;
        ApiResponse::from_response(response).await
    }

    /// Stream every paid dividend, page by page.
    pub fn dividends_stream(&self, query: HistoryQuery) -> PaginatedStream<HistoryDividendItem> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_DIVIDENDS, Some(query.without_cursor())),
        )
    }

    /// Get one page of cash transactions.
    pub async fn transactions(
        &self,
        query: TransactionsQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoryTransactionItem>>> {
        let response = self
            .inner
            .get_with_query(paths::HISTORY_TRANSACTIONS, &query)
            .await?;
        ApiResponse::from_response(response).await
    }

    /// Stream every cash transaction, page by page.
    pub fn transactions_stream(
        &self,
        query: TransactionsQuery,
    ) -> PaginatedStream<HistoryTransactionItem> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_TRANSACTIONS, Some(query.without_cursor())),
        )
    }

    /// List requested CSV exports and their status.
    pub async fn reports(&self) -> Result<ApiResponse<Vec<ReportResponse>>> {
        let response = self.inner.get(paths::HISTORY_EXPORTS).await?;
        ApiResponse::from_response(response).await
    }

    /// Queue a CSV export. Poll [`reports`](Self::reports) for the download link.
    pub async fn request_report(
        &self,
        request: &PublicReportRequest,
    ) -> Result<ApiResponse<EnqueuedReportResponse>> {
        let response = self.inner.post(paths::HISTORY_EXPORTS, request).await?;
        ApiResponse::from_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_query_skips_unset_params() {
        let query = HistoryQuery::new().ticker("AAPL_US_EQ");
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({"ticker": "AAPL_US_EQ"}));
    }

    #[test]
    fn test_without_cursor() {
        let query = HistoryQuery::new().cursor(999).limit(10).without_cursor();
        assert_eq!(query.cursor, None);
        assert_eq!(query.limit, Some(10));

        let tx = TransactionsQuery::new().cursor("abc").without_cursor();
        assert_eq!(tx.cursor, None);
    }

    #[test]
    fn test_transactions_query_time_is_rfc3339() {
        let query = TransactionsQuery::new()
            .time(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .limit(20);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["time"], "2024-01-01T00:00:00Z");
        assert_eq!(value["limit"], 20);
        assert!(value.get("cursor").is_none());
    }
}
