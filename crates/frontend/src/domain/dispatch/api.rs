//! Dispatch endpoints beyond the generic list/update/delete.

use contracts::domain::dispatch::{DispatchCreate, DispatchSummary};

use crate::shared::api::{Api, ApiError};

pub async fn create(api: &Api, payload: &DispatchCreate) -> Result<DispatchSummary, ApiError> {
    api.post_json("/dispatches", payload).await
}

/// Dispatches already registered under the given order number, used for
/// duplicate detection before creating.
pub async fn by_order(api: &Api, order: &str) -> Result<Vec<DispatchSummary>, ApiError> {
    let path = format!("/dispatches?orden={}&page=1&limit=1", urlencoding::encode(order));
    api.get_json(&path).await
}

/// Mark the dispatch as handed to the driver; returns the updated row.
pub async fn mark_driver(api: &Api, id: i64) -> Result<DispatchSummary, ApiError> {
    api.post_json(&format!("/dispatches/{}/mark-driver", id), &serde_json::json!({}))
        .await
}

/// Mark the dispatch as delivered to the client; returns the updated row.
pub async fn mark_client(api: &Api, id: i64) -> Result<DispatchSummary, ApiError> {
    api.post_json(&format!("/dispatches/{}/mark-client", id), &serde_json::json!({}))
        .await
}

/// Dispatch counts for the current month, one integer per day (31 slots).
pub async fn monthly(api: &Api) -> Result<Vec<i64>, ApiError> {
    api.get_json("/dispatches/monthly").await
}

/// PDF receipt for a dispatch, rendered server-side in POS-80 format.
pub async fn receipt_pdf(api: &Api, id: i64) -> Result<Vec<u8>, ApiError> {
    api.get_bytes(&format!("/print/{}?format=pos80&inline=1", id)).await
}
