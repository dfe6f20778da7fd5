use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Dispatch row as returned by `GET /dispatches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub id: i64,
    #[serde(rename = "orden")]
    pub order: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "chofer")]
    pub driver: String,
    pub created_by: String,
    #[serde(rename = "fecha")]
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub delivered_driver: bool,
    #[serde(default)]
    pub delivered_client: bool,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
    /// Display only; assigned by the backend at creation.
    #[serde(rename = "paquete_numero", default)]
    pub package_number: Option<i64>,
    #[serde(rename = "factura_numero", default)]
    pub invoice_number: Option<String>,
}

/// Payload for `PUT /dispatches/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchUpdate {
    #[serde(rename = "orden")]
    pub order: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "chofer")]
    pub driver: String,
    pub status: String,
    #[serde(rename = "factura_numero")]
    pub invoice_number: String,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
}

/// Payload for `POST /dispatches`.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchCreate {
    #[serde(rename = "orden")]
    pub order: String,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "chofer")]
    pub driver: String,
    #[serde(rename = "paquete_numero", skip_serializing_if = "Option::is_none")]
    pub package_number: Option<String>,
    #[serde(rename = "productos")]
    pub products: Vec<LineItem>,
    /// Set after the user confirms creating a duplicate order number.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,
}

/// Statuses a dispatch can be edited into.
pub const DISPATCH_STATUSES: &[&str] = &[
    "pendiente",
    "entregado_chofer",
    "entregado_cliente",
    "cancelado",
];

/// Human-readable label for a wire status value.
pub fn status_label(status: &str) -> &str {
    match status {
        "entregado_chofer" => "Entregado a Chofer",
        "entregado_cliente" => "Pedido Entregado",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(status_label("entregado_chofer"), "Entregado a Chofer");
        assert_eq!(status_label("entregado_cliente"), "Pedido Entregado");
        assert_eq!(status_label("pendiente"), "pendiente");
    }

    #[test]
    fn create_payload_omits_force_when_false() {
        let payload = DispatchCreate {
            order: "A-1".into(),
            client: "Acme".into(),
            driver: "3".into(),
            package_number: None,
            products: vec![],
            force: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("force").is_none());
        assert!(json.get("paquete_numero").is_none());
    }

    #[test]
    fn summary_tolerates_missing_optional_fields() {
        let row: DispatchSummary = serde_json::from_str(
            r#"{"id":1,"orden":"A-1","cliente":"Acme","chofer":"Luis",
                "created_by":"ana","fecha":"2025-03-01T10:00:00",
                "status":"pendiente","productos":[]}"#,
        )
        .unwrap();
        assert!(!row.delivered_driver);
        assert!(row.package_number.is_none());
        assert!(row.invoice_number.is_none());
    }
}
