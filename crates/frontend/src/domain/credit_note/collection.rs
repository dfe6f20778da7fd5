//! Credit-note instantiation of the tracking-list machinery.

use contracts::domain::credit_note::{CreditNotePayload, CreditNoteSummary};
use contracts::domain::line_item::LineItem;

use crate::shared::export::CsvExportable;
use crate::shared::list_controller::{LineItemDraft, TrackedCollection};

#[derive(Clone, Debug, Default)]
pub struct CreditNoteDraft {
    pub client: String,
    pub order_number: String,
    pub invoice_number: String,
    pub credit_note_number: String,
    pub reason: String,
    pub items: Vec<LineItem>,
}

impl LineItemDraft for CreditNoteDraft {
    fn items(&self) -> &Vec<LineItem> {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }
}

pub struct CreditNotes;

impl TrackedCollection for CreditNotes {
    type Summary = CreditNoteSummary;
    type Draft = CreditNoteDraft;
    type SavePayload = CreditNotePayload;

    const PATH: &'static str = "/credit-notes";
    const FILTER_FIELDS: &'static [&'static str] = &[
        "client",
        "order_number",
        "invoice_number",
        "credit_note_number",
        "reason",
        "usuario",
        "fecha_desde",
        "fecha_hasta",
    ];

    const LOAD_ERROR: &'static str = "No se pudieron cargar las notas de crédito";
    const SAVE_ERROR: &'static str = "No se pudo guardar la nota de crédito";
    const SAVED_MESSAGE: &'static str = "Nota de crédito actualizada";
    const DELETE_ERROR: &'static str = "No se pudo eliminar la nota de crédito";
    const DELETED_MESSAGE: &'static str = "Nota de crédito eliminada";
    const CONFIRM_DELETE: &'static str = "¿Eliminar esta nota de crédito?";

    fn id(summary: &Self::Summary) -> i64 {
        summary.id
    }

    fn draft(summary: &Self::Summary) -> Self::Draft {
        CreditNoteDraft {
            client: summary.client.clone(),
            order_number: summary.order_number.clone(),
            invoice_number: summary.invoice_number.clone(),
            credit_note_number: summary.credit_note_number.clone(),
            reason: summary.reason.clone(),
            items: summary.products.iter().map(LineItem::normalized).collect(),
        }
    }

    fn payload(draft: &Self::Draft) -> Self::SavePayload {
        CreditNotePayload {
            client: draft.client.clone(),
            order_number: draft.order_number.clone(),
            invoice_number: draft.invoice_number.clone(),
            credit_note_number: draft.credit_note_number.clone(),
            reason: draft.reason.clone(),
            products: draft.items.iter().map(LineItem::normalized).collect(),
        }
    }

    fn absorb(summary: &mut Self::Summary, updated: Self::Summary) {
        *summary = updated;
    }
}

/// Export row: one line per credit note, products flattened.
impl CsvExportable for CreditNoteSummary {
    fn headers() -> Vec<&'static str> {
        vec![
            "N° NC",
            "Cliente",
            "Orden",
            "Factura",
            "Motivo",
            "Usuario",
            "Fecha",
            "Productos",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.credit_note_number.clone(),
            self.client.clone(),
            self.order_number.clone(),
            self.invoice_number.clone(),
            self.reason.clone(),
            self.created_by.clone(),
            self.date.clone(),
            self.products
                .iter()
                .map(|item| format!("{} {} {}", item.quantity, item.unit, item.name))
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::CsvExportable;

    fn summary() -> CreditNoteSummary {
        serde_json::from_str(
            r#"{"id":3,"client":"Acme","order_number":"A-12",
                "invoice_number":"F-9","credit_note_number":"NC-4",
                "reason":"producto dañado","created_by":"ana",
                "fecha":"2025-03-01T10:00:00",
                "productos":[{"nombre":"Harina","cantidad":2,"unidad":"kg"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn draft_and_payload_round_the_editable_fields() {
        let mut draft = CreditNotes::draft(&summary());
        assert_eq!(draft.reason, "producto dañado");
        draft.reason = "error de facturación".to_string();
        let json = serde_json::to_value(CreditNotes::payload(&draft)).unwrap();
        assert_eq!(json["reason"], "error de facturación");
        assert_eq!(json["productos"][0]["unidad"], "kg");
    }

    #[test]
    fn csv_row_flattens_the_products() {
        let row = summary().to_csv_row();
        assert_eq!(row[0], "NC-4");
        assert_eq!(row[7], "2 kg Harina");
    }
}
