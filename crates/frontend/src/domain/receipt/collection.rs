//! Supplier-receipt instantiation of the tracking-list machinery.

use contracts::domain::line_item::LineItem;
use contracts::domain::receipt::{ReceiptPayload, ReceiptSummary};

use crate::shared::list_controller::{LineItemDraft, TrackedCollection};

#[derive(Clone, Debug, Default)]
pub struct ReceiptDraft {
    pub order: String,
    pub supplier: String,
    pub status: String,
    pub items: Vec<LineItem>,
}

impl LineItemDraft for ReceiptDraft {
    fn items(&self) -> &Vec<LineItem> {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }
}

pub struct Receipts;

impl TrackedCollection for Receipts {
    type Summary = ReceiptSummary;
    type Draft = ReceiptDraft;
    type SavePayload = ReceiptPayload;

    const PATH: &'static str = "/receipts";
    const FILTER_FIELDS: &'static [&'static str] =
        &["supplier", "orden", "usuario", "fecha_desde", "fecha_hasta"];

    const LOAD_ERROR: &'static str = "No se pudieron cargar las recepciones";
    const SAVE_ERROR: &'static str = "No se pudo guardar la recepción";
    const SAVED_MESSAGE: &'static str = "Recepción actualizada";
    const DELETE_ERROR: &'static str = "No se pudo eliminar la recepción";
    const DELETED_MESSAGE: &'static str = "Recepción eliminada";
    const CONFIRM_DELETE: &'static str = "¿Eliminar esta recepción?";

    fn id(summary: &Self::Summary) -> i64 {
        summary.id
    }

    fn draft(summary: &Self::Summary) -> Self::Draft {
        ReceiptDraft {
            order: summary.order.clone(),
            supplier: summary.supplier.clone(),
            status: summary.status.clone(),
            items: summary.products.iter().map(LineItem::normalized).collect(),
        }
    }

    fn payload(draft: &Self::Draft) -> Self::SavePayload {
        ReceiptPayload {
            order: draft.order.clone(),
            supplier: draft.supplier.clone(),
            status: draft.status.clone(),
            products: draft.items.iter().map(LineItem::normalized).collect(),
        }
    }

    fn absorb(summary: &mut Self::Summary, updated: Self::Summary) {
        *summary = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_the_draft() {
        let summary: ReceiptSummary = serde_json::from_str(
            r#"{"id":4,"orden":"OC-8","supplier":"Molinos SA","created_by":"ana",
                "fecha":"2025-03-04T09:00:00","status":"pendiente",
                "productos":[{"nombre":"Harina","cantidad":50,"unidad":"kg"}]}"#,
        )
        .unwrap();
        let mut draft = Receipts::draft(&summary);
        draft.status = "recibido".to_string();
        let json = serde_json::to_value(Receipts::payload(&draft)).unwrap();
        assert_eq!(json["orden"], "OC-8");
        assert_eq!(json["status"], "recibido");
    }
}
