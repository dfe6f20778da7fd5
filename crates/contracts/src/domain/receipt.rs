use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Supplier receipt row as returned by `GET /receipts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub id: i64,
    #[serde(rename = "orden")]
    pub order: String,
    pub supplier: String,
    pub created_by: String,
    #[serde(rename = "fecha")]
    pub date: String,
    pub status: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}

/// Statuses a supplier receipt can be edited into.
pub const RECEIPT_STATUSES: &[&str] = &["pendiente", "recibido", "cancelado"];

/// Payload for `POST /receipts` and `PUT /receipts/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptPayload {
    #[serde(rename = "orden")]
    pub order: String,
    pub supplier: String,
    pub status: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}
