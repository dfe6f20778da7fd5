use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Credit note row as returned by `GET /credit-notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditNoteSummary {
    pub id: i64,
    pub client: String,
    pub order_number: String,
    pub invoice_number: String,
    pub credit_note_number: String,
    pub reason: String,
    pub created_by: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}

/// Payload for `POST /credit-notes` and `PUT /credit-notes/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreditNotePayload {
    pub client: String,
    pub order_number: String,
    pub invoice_number: String,
    pub credit_note_number: String,
    pub reason: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}
