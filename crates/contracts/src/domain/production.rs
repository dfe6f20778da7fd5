use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Production run row as returned by `GET /productions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub id: i64,
    pub operator: String,
    pub created_by: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}

/// Payload for `POST /productions` and `PUT /productions/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionPayload {
    pub operator: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}
