//! Dispatch instantiation of the tracking-list machinery.

use contracts::domain::dispatch::{DispatchSummary, DispatchUpdate};
use contracts::domain::line_item::LineItem;

use crate::shared::list_controller::{LineItemDraft, TrackedCollection};

/// Editable copy of a dispatch row.
#[derive(Clone, Debug, Default)]
pub struct DispatchDraft {
    pub order: String,
    pub client: String,
    pub driver: String,
    pub status: String,
    pub invoice_number: String,
    pub items: Vec<LineItem>,
}

impl LineItemDraft for DispatchDraft {
    fn items(&self) -> &Vec<LineItem> {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }
}

pub struct Dispatches;

impl TrackedCollection for Dispatches {
    type Summary = DispatchSummary;
    type Draft = DispatchDraft;
    type SavePayload = DispatchUpdate;

    const PATH: &'static str = "/dispatches";
    const FILTER_FIELDS: &'static [&'static str] = &[
        "cliente",
        "orden",
        "factura",
        "usuario",
        "chofer",
        "fecha_desde",
        "fecha_hasta",
    ];

    const LOAD_ERROR: &'static str = "No se pudieron cargar los despachos";
    const SAVE_ERROR: &'static str = "No se pudo guardar el despacho";
    const SAVED_MESSAGE: &'static str = "Despacho actualizado";
    const DELETE_ERROR: &'static str = "No se pudo eliminar el despacho";
    const DELETED_MESSAGE: &'static str = "Despacho eliminado";
    const CONFIRM_DELETE: &'static str = "¿Eliminar este despacho?";

    fn id(summary: &Self::Summary) -> i64 {
        summary.id
    }

    fn draft(summary: &Self::Summary) -> Self::Draft {
        DispatchDraft {
            order: summary.order.clone(),
            client: summary.client.clone(),
            driver: summary.driver.clone(),
            status: summary.status.clone(),
            invoice_number: summary.invoice_number.clone().unwrap_or_default(),
            items: summary.products.iter().map(LineItem::normalized).collect(),
        }
    }

    fn payload(draft: &Self::Draft) -> Self::SavePayload {
        DispatchUpdate {
            order: draft.order.clone(),
            client: draft.client.clone(),
            driver: draft.driver.clone(),
            status: draft.status.clone(),
            invoice_number: draft.invoice_number.clone(),
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

    fn summary() -> DispatchSummary {
        serde_json::from_str(
            r#"{"id":7,"orden":"A-12","cliente":"Acme","chofer":"Luis",
                "created_by":"ana","fecha":"2025-03-01T10:00:00",
                "status":"pendiente","factura_numero":"F-9",
                "productos":[{"nombre":"Harina","cantidad":2,"unidad":"kg"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn draft_copies_the_editable_fields() {
        let draft = Dispatches::draft(&summary());
        assert_eq!(draft.order, "A-12");
        assert_eq!(draft.invoice_number, "F-9");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].name, "Harina");
    }

    #[test]
    fn payload_carries_the_full_draft() {
        let mut draft = Dispatches::draft(&summary());
        draft.status = "entregado_chofer".to_string();
        let json = serde_json::to_value(Dispatches::payload(&draft)).unwrap();
        assert_eq!(json["status"], "entregado_chofer");
        assert_eq!(json["productos"][0]["nombre"], "Harina");
        assert_eq!(json["factura_numero"], "F-9");
    }

    #[test]
    fn absorb_replaces_the_whole_row() {
        let mut row = summary();
        let mut updated = summary();
        updated.status = "cancelado".to_string();
        Dispatches::absorb(&mut row, updated);
        assert_eq!(row.status, "cancelado");
    }
}
