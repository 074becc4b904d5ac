//! Positions service.

use std::sync::Arc;

use super::paths;
use crate::client::{ApiResponse, ClientInner};
use crate::models::Position;
use crate::Result;

/// Service for open positions.
pub struct PositionsService {
    inner: Arc<ClientInner>,
}

impl PositionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all open positions.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Position>>> {
        let response = self.inner.get(paths::POSITIONS).await?;
        ApiResponse::from_response(response).await
    }
}
