use contracts::domain::receipt::{ReceiptPayload, ReceiptSummary};

use crate::shared::api::{Api, ApiError};

pub async fn create(api: &Api, payload: &ReceiptPayload) -> Result<ReceiptSummary, ApiError> {
    api.post_json("/receipts", payload).await
}
