//! Production-run instantiation of the tracking-list machinery.

use contracts::domain::line_item::LineItem;
use contracts::domain::production::{ProductionPayload, ProductionSummary};

use crate::shared::list_controller::{LineItemDraft, TrackedCollection};

#[derive(Clone, Debug, Default)]
pub struct ProductionDraft {
    pub operator: String,
    pub items: Vec<LineItem>,
}

impl LineItemDraft for ProductionDraft {
    fn items(&self) -> &Vec<LineItem> {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }
}

pub struct Productions;

impl TrackedCollection for Productions {
    type Summary = ProductionSummary;
    type Draft = ProductionDraft;
    type SavePayload = ProductionPayload;

    const PATH: &'static str = "/productions";
    const FILTER_FIELDS: &'static [&'static str] =
        &["operator", "usuario", "fecha_desde", "fecha_hasta"];

    const LOAD_ERROR: &'static str = "No se pudieron cargar las producciones";
    const SAVE_ERROR: &'static str = "No se pudo guardar la producción";
    const SAVED_MESSAGE: &'static str = "Producción actualizada";
    const DELETE_ERROR: &'static str = "No se pudo eliminar la producción";
    const DELETED_MESSAGE: &'static str = "Producción eliminada";
    const CONFIRM_DELETE: &'static str = "¿Eliminar esta producción?";

    fn id(summary: &Self::Summary) -> i64 {
        summary.id
    }

    fn draft(summary: &Self::Summary) -> Self::Draft {
        ProductionDraft {
            operator: summary.operator.clone(),
            items: summary.products.iter().map(LineItem::normalized).collect(),
        }
    }

    fn payload(draft: &Self::Draft) -> Self::SavePayload {
        ProductionPayload {
            operator: draft.operator.clone(),
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
    fn draft_carries_operator_and_items() {
        let summary: ProductionSummary = serde_json::from_str(
            r#"{"id":1,"operator":"Luis","created_by":"ana",
                "fecha":"2025-03-03T07:00:00",
                "productos":[{"nombre":"Pan","cantidad":120,"unidad":"unidades"}]}"#,
        )
        .unwrap();
        let draft = Productions::draft(&summary);
        assert_eq!(draft.operator, "Luis");
        assert_eq!(draft.items[0].quantity, 120.0);
    }
}
