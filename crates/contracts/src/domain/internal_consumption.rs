use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Areas an internal withdrawal can be charged to.
pub const AREAS: &[&str] = &[
    "Administración",
    "Producción",
    "Almacén",
    "Ventas",
    "Mantenimiento",
    "Otros",
];

/// Internal consumption row as returned by `GET /internal-consumptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalConsumptionSummary {
    pub id: i64,
    /// Person who withdrew the products.
    #[serde(rename = "nombre_retira")]
    pub withdrawn_by: String,
    pub area: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    pub created_by: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}

/// Payload for `POST /internal-consumptions` and `PUT /internal-consumptions/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct InternalConsumptionPayload {
    #[serde(rename = "nombre_retira")]
    pub withdrawn_by: String,
    pub area: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}
