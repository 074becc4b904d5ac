//! Orders service for order placement and management.

use std::sync::Arc;

use super::paths;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{
    LimitOrderRequest, MarketOrderRequest, Order, OrderId, StopLimitOrderRequest,
    StopOrderRequest,
};
use crate::Result;

/// Service for order operations.
///
/// Quantities are signed: positive buys, negative sells.
///
/// # Example
///
/// ```no_run
/// use trading212_rs::models::{LimitOrderRequest, TimeValidity};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: trading212_rs::Trading212Client) -> trading212_rs::Result<()> {
/// let request = LimitOrderRequest::new("AAPL_US_EQ", dec!(1), dec!(150.00))
///     .time_validity(TimeValidity::GoodTillCancel);
///
/// let placed = client.orders().place_limit(&request).await?;
/// if let Some(id) = placed.data.order_id() {
///     client.orders().cancel(id).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List pending orders.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Order>>> {
        let response = self.inner.get(paths::ORDERS).await?;
        ApiResponse::from_response(response).await
    }

    /// Get a pending order by ID.
    pub async fn get(&self, order_id: OrderId) -> Result<ApiResponse<Order>> {
        let response = self.inner.get(&paths::order(order_id)).await?;
        ApiResponse::from_response(response).await
    }

    /// Cancel a pending order.
    ///
    /// Cancellation is asynchronous on the exchange side; a success only
    /// means the request was accepted.
    pub async fn cancel(&self, order_id: OrderId) -> Result<ApiResponse<()>> {
        let response = self.inner.delete(&paths::order(order_id)).await?;
        Ok(ApiResponse::empty(response.headers(), response.status()))
    }

    /// Place a market order.
    pub async fn place_market(&self, request: &MarketOrderRequest) -> Result<ApiResponse<Order>> {
        let response = self.inner.post(paths::ORDERS_MARKET, request).await?;
        ApiResponse::from_response(response).await
    }

    /// Place a limit order.
    pub async fn place_limit(&self, request: &LimitOrderRequest) -> Result<ApiResponse<Order>> {
        let response = self.inner.post(paths::ORDERS_LIMIT, request).await?;
        ApiResponse::from_response(response).await
    }

    /// Place a stop order.
    pub async fn place_stop(&self, request: &StopOrderRequest) -> Result<ApiResponse<Order>> {
        let response = self.inner.post(paths::ORDERS_STOP, request).await?;
        ApiResponse::from_response(response).await
    }

    /// Place a stop-limit order.
    pub async fn place_stop_limit(
        &self,
        request: &StopLimitOrderRequest,
    ) -> Result<ApiResponse<Order>> {
        let response = self.inner.post(paths::ORDERS_STOP_LIMIT, request).await?;
        ApiResponse::from_response(response).await
    }
}
