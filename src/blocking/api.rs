//! Blocking resource services.

use std::sync::Arc;

use super::paginated::{paginate, PaginatedIter};
use super::ClientInner;
use crate::api::{paths, warn_deprecated, HistoryQuery, TransactionsQuery};
use crate::client::paginated::PageSource;
use crate::client::ApiResponse;
use crate::models::{
    AccountSummary, DuplicatePieRequest, EnqueuedReportResponse, Exchange, HistoricalOrder,
    HistoryDividendItem, HistoryTransactionItem, LimitOrderRequest, MarketOrderRequest, Order,
    OrderId, PaginatedResponse, PieDetails, PieId, PieRequest, PieSummary, Position,
    PublicReportRequest, ReportResponse, StopLimitOrderRequest, StopOrderRequest,
    TradableInstrument,
};
use crate::Result;

/// Blocking account service.
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the cash, investments and total value of the account.
    pub fn summary(&self) -> Result<ApiResponse<AccountSummary>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::ACCOUNT_SUMMARY)?)
    }
}

/// Blocking instruments metadata service.
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every instrument the account can trade.
    pub fn list(&self) -> Result<ApiResponse<Vec<TradableInstrument>>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::INSTRUMENTS)?)
    }

    /// List exchanges with their working schedules.
    pub fn exchanges(&self) -> Result<ApiResponse<Vec<Exchange>>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::EXCHANGES)?)
    }
}

/// Blocking orders service.
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List pending orders.
    pub fn list(&self) -> Result<ApiResponse<Vec<Order>>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::ORDERS)?)
    }

    /// Get a pending order by ID.
    pub fn get(&self, order_id: OrderId) -> Result<ApiResponse<Order>> {
        ApiResponse::from_blocking_response(self.inner.get(&paths::order(order_id))?)
    }

    /// Cancel a pending order.
    pub fn cancel(&self, order_id: OrderId) -> Result<ApiResponse<()>> {
        let response = self.inner.delete(&paths::order(order_id))?;
        Ok(ApiResponse::empty(response.headers(), response.status()))
    }

    /// Place a market order.
    pub fn place_market(&self, request: &MarketOrderRequest) -> Result<ApiResponse<Order>> {
        ApiResponse::from_blocking_response(self.inner.post(paths::ORDERS_MARKET, request)?)
    }

    /// Place a limit order.
    pub fn place_limit(&self, request: &LimitOrderRequest) -> Result<ApiResponse<Order>> {
        ApiResponse::from_blocking_response(self.inner.post(paths::ORDERS_LIMIT, request)?)
    }

    /// Place a stop order.
    pub fn place_stop(&self, request: &StopOrderRequest) -> Result<ApiResponse<Order>> {
        ApiResponse::from_blocking_response(self.inner.post(paths::ORDERS_STOP, request)?)
    }

    /// Place a stop-limit order.
    pub fn place_stop_limit(&self, request: &StopLimitOrderRequest) -> Result<ApiResponse<Order>> {
        ApiResponse::from_blocking_response(self.inner.post(paths::ORDERS_STOP_LIMIT, request)?)
    }
}

/// Blocking positions service.
pub struct PositionsService {
    inner: Arc<ClientInner>,
}

impl PositionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all open positions.
    pub fn list(&self) -> Result<ApiResponse<Vec<Position>>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::POSITIONS)?)
    }
}

/// Blocking history service.
///
/// The `*_iter` methods walk every page lazily on the calling thread.
pub struct HistoryService {
    inner: Arc<ClientInner>,
}

impl HistoryService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get one page of historical orders.
    pub fn orders(
        &self,
        query: HistoryQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoricalOrder>>> {
        ApiResponse::from_blocking_response(
            self.inner.get_with_query(paths::HISTORY_ORDERS, &query)?,
        )
    }

    /// Iterate over every historical order.
    pub fn orders_iter(&self, query: HistoryQuery) -> PaginatedIter<HistoricalOrder> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_ORDERS, Some(query.without_cursor())),
        )
    }

    /// Get one page of paid dividends.
    pub fn dividends(
        &self,
        query: HistoryQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoryDividendItem>>> {
        ApiResponse::from_blocking_response(
            self.inner.get_with_query(paths::HISTORY_DIVIDENDS, &query)?,
        )
    }

    /// Iterate over every paid dividend.
    pub fn dividends_iter(&self, query: HistoryQuery) -> PaginatedIter<HistoryDividendItem> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_DIVIDENDS, Some(query.without_cursor())),
        )
    }

    /// Get one page of cash transactions.
    pub fn transactions(
        &self,
        query: TransactionsQuery,
    ) -> Result<ApiResponse<PaginatedResponse<HistoryTransactionItem>>> {
        ApiResponse::from_blocking_response(
            self.inner.get_with_query(paths::HISTORY_TRANSACTIONS, &query)?,
        )
    }

    /// Iterate over every cash transaction.
    pub fn transactions_iter(
        &self,
        query: TransactionsQuery,
    ) -> PaginatedIter<HistoryTransactionItem> {
        paginate(
            self.inner.clone(),
            PageSource::new(paths::HISTORY_TRANSACTIONS, Some(query.without_cursor())),
        )
    }

    /// List requested CSV exports and their status.
    pub fn reports(&self) -> Result<ApiResponse<Vec<ReportResponse>>> {
        ApiResponse::from_blocking_response(self.inner.get(paths::HISTORY_EXPORTS)?)
    }

    /// Queue a CSV export.
    pub fn request_report(
        &self,
        request: &PublicReportRequest,
    ) -> Result<ApiResponse<EnqueuedReportResponse>> {
        ApiResponse::from_blocking_response(self.inner.post(paths::HISTORY_EXPORTS, request)?)
    }
}

/// Blocking pies service (deprecated endpoints).
pub struct PiesService {
    inner: Arc<ClientInner>,
}

impl PiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all pies.
    pub fn list(&self) -> Result<ApiResponse<Vec<PieSummary>>> {
        warn_deprecated("list");
        ApiResponse::from_blocking_response(self.inner.get(paths::PIES)?)
    }

    /// Get a pie with its instruments and settings.
    pub fn get(&self, pie_id: PieId) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("get");
        ApiResponse::from_blocking_response(self.inner.get(&paths::pie(pie_id))?)
    }

    /// Create a pie.
    pub fn create(&self, request: &PieRequest) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("create");
        ApiResponse::from_blocking_response(self.inner.post(paths::PIES, request)?)
    }

    /// Update a pie.
    pub fn update(&self, pie_id: PieId, request: &PieRequest) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("update");
        ApiResponse::from_blocking_response(self.inner.put(&paths::pie(pie_id), request)?)
    }

    /// Delete a pie.
    pub fn delete(&self, pie_id: PieId) -> Result<ApiResponse<()>> {
        warn_deprecated("delete");
        let response = self.inner.delete(&paths::pie(pie_id))?;
        Ok(ApiResponse::empty(response.headers(), response.status()))
    }

    /// Duplicate a pie.
    pub fn duplicate(
        &self,
        pie_id: PieId,
        request: &DuplicatePieRequest,
    ) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("duplicate");
        ApiResponse::from_blocking_response(
            self.inner.post(&paths::pie_duplicate(pie_id), request)?,
        )
    }
}
