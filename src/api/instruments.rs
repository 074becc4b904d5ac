//! Instruments metadata service.

use std::sync::Arc;

use super::paths;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{Exchange, TradableInstrument};
use crate::Result;

/// Service for instrument and exchange metadata.
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every instrument the account can trade.
    ///
    /// The list is large; cache it rather than calling this per request.
    pub async fn list(&self) -> Result<ApiResponse<Vec<TradableInstrument>>> {
        let response = self.inner.get(paths::INSTRUMENTS).await?;
        ApiResponse::from_response(response).await
    }

    /// List exchanges with their working schedules.
    pub async fn exchanges(&self) -> Result<ApiResponse<Vec<Exchange>>> {
        let response = self.inner.get(paths::EXCHANGES).await?;
        ApiResponse::from_response(response).await
    }
}
