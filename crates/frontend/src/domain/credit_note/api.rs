//! Credit-note endpoints beyond the generic list/update/delete.

use contracts::domain::credit_note::{CreditNotePayload, CreditNoteSummary};

use crate::shared::api::{Api, ApiError};

pub async fn create(api: &Api, payload: &CreditNotePayload) -> Result<CreditNoteSummary, ApiError> {
    api.post_json("/credit-notes", payload).await
}

/// PDF voucher for a credit note, rendered server-side.
pub async fn voucher_pdf(api: &Api, id: i64) -> Result<Vec<u8>, ApiError> {
    api.get_bytes(&format!("/print-credit-note/{}", id)).await
}
