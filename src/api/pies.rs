//! Pies service.
//!
//! Trading 212 has deprecated pie management through the public API. The
//! endpoints still work, and every call here logs a warning under the
//! `trading212_rs::deprecated` target before the request is sent.

use std::sync::Arc;

use super::paths;
use crate::client::{ApiResponse, ClientInner};
use crate::models::{DuplicatePieRequest, PieDetails, PieId, PieRequest, PieSummary};
use crate::Result;

/// Log the pies deprecation notice for one operation.
pub(crate) fn warn_deprecated(operation: &'static str) {
    tracing::warn!(
        target: "trading212_rs::deprecated",
        operation,
        "The pies API is deprecated. Pie management via the Trading 212 Public API \
         is no longer recommended."
    );
}

/// Service for pies (deprecated endpoints).
pub struct PiesService {
    inner: Arc<ClientInner>,
}

impl PiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List all pies.
    pub async fn list(&self) -> Result<ApiResponse<Vec<PieSummary>>> {
        warn_deprecated("list");
        let response = self.inner.get(paths::PIES).await?;
        ApiResponse::from_response(response).await
    }

    /// Get a pie with its instruments and settings.
    pub async fn get(&self, pie_id: PieId) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("get");
        let response = self.inner.get(&paths::pie(pie_id)).await?;
        ApiResponse::from_response(response).await
    }

    /// Create a pie.
    pub async fn create(&self, request: &PieRequest) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("create");
        let response = self.inner.post(paths::PIES, request).await?;
        ApiResponse::from_response(response).await
    }

    /// Update a pie.
    pub async fn update(
        &self,
        pie_id: PieId,
        request: &PieRequest,
    ) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("update");
        let response = self.inner.put(&paths::pie(pie_id), request).await?;
        ApiResponse::from_response(response).await
    }

    /// Delete a pie.
    pub async fn delete(&self, pie_id: PieId) -> Result<ApiResponse<()>> {
        warn_deprecated("delete");
        let response = self.inner.delete(&paths::pie(pie_id)).await?;
        Ok(ApiResponse::empty(response.headers(), response.status()))
    }

    /// Duplicate a pie.
    pub async fn duplicate(
        &self,
        pie_id: PieId,
        request: &DuplicatePieRequest,
    ) -> Result<ApiResponse<PieDetails>> {
        warn_deprecated("duplicate");
        let response = self.inner.post(&paths::pie_duplicate(pie_id), request).await?;
        ApiResponse::from_response(response).await
    }
}
