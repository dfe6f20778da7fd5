//! Calls against the `/billing` endpoints (admin only).

use contracts::system::billing::{
    BillingStatus, BillingUserList, BlockMultipleRequest, MarkPaidMultipleRequest,
    MarkPaidRequest,
};

use crate::shared::api::{Api, ApiError};

pub async fn status(api: &Api) -> Result<BillingStatus, ApiError> {
    api.get_json("/billing/status").await
}

pub async fn users(api: &Api) -> Result<BillingUserList, ApiError> {
    api.get_json("/billing/users").await
}

pub async fn mark_paid(api: &Api, request: &MarkPaidRequest) -> Result<serde_json::Value, ApiError> {
    api.post_json("/billing/mark-paid", request).await
}

pub async fn mark_paid_multiple(
    api: &Api,
    user_ids: Vec<i64>,
    until: String,
) -> Result<serde_json::Value, ApiError> {
    api.post_json(
        "/billing/mark-paid-multiple",
        &MarkPaidMultipleRequest { user_ids, until },
    )
    .await
}

pub async fn block_multiple(api: &Api, user_ids: Vec<i64>) -> Result<serde_json::Value, ApiError> {
    api.post_json("/billing/block-multiple", &BlockMultipleRequest { user_ids })
        .await
}
