//! Internal-consumption instantiation of the tracking-list machinery.

use contracts::domain::internal_consumption::{
    InternalConsumptionPayload, InternalConsumptionSummary,
};
use contracts::domain::line_item::LineItem;

use crate::shared::export::CsvExportable;
use crate::shared::list_controller::{LineItemDraft, TrackedCollection};

#[derive(Clone, Debug, Default)]
pub struct InternalConsumptionDraft {
    pub withdrawn_by: String,
    pub area: String,
    pub reason: String,
    pub items: Vec<LineItem>,
}

impl LineItemDraft for InternalConsumptionDraft {
    fn items(&self) -> &Vec<LineItem> {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<LineItem> {
        &mut self.items
    }
}

pub struct InternalConsumptions;

impl TrackedCollection for InternalConsumptions {
    type Summary = InternalConsumptionSummary;
    type Draft = InternalConsumptionDraft;
    type SavePayload = InternalConsumptionPayload;

    const PATH: &'static str = "/internal-consumptions";
    const FILTER_FIELDS: &'static [&'static str] = &[
        "nombre_retira",
        "area",
        "motivo",
        "usuario",
        "fecha_desde",
        "fecha_hasta",
    ];

    const LOAD_ERROR: &'static str = "No se pudieron cargar los consumos internos";
    const SAVE_ERROR: &'static str = "No se pudo guardar el consumo";
    const SAVED_MESSAGE: &'static str = "Consumo actualizado";
    const DELETE_ERROR: &'static str = "No se pudo eliminar el consumo";
    const DELETED_MESSAGE: &'static str = "Consumo eliminado";
    const CONFIRM_DELETE: &'static str = "¿Eliminar este consumo interno?";

    fn id(summary: &Self::Summary) -> i64 {
        summary.id
    }

    fn draft(summary: &Self::Summary) -> Self::Draft {
        InternalConsumptionDraft {
            withdrawn_by: summary.withdrawn_by.clone(),
            area: summary.area.clone(),
            reason: summary.reason.clone(),
            items: summary.products.iter().map(LineItem::normalized).collect(),
        }
    }

    fn payload(draft: &Self::Draft) -> Self::SavePayload {
        InternalConsumptionPayload {
            withdrawn_by: draft.withdrawn_by.clone(),
            area: draft.area.clone(),
            reason: draft.reason.clone(),
            products: draft.items.iter().map(LineItem::normalized).collect(),
        }
    }

    fn absorb(summary: &mut Self::Summary, updated: Self::Summary) {
        *summary = updated;
    }
}

impl CsvExportable for InternalConsumptionSummary {
    fn headers() -> Vec<&'static str> {
        vec!["Retira", "Área", "Motivo", "Usuario", "Fecha", "Productos"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.withdrawn_by.clone(),
            self.area.clone(),
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

    fn summary() -> InternalConsumptionSummary {
        serde_json::from_str(
            r#"{"id":2,"nombre_retira":"Pedro","area":"Producción",
                "motivo":"merma","created_by":"ana",
                "fecha":"2025-03-02T08:30:00",
                "productos":[{"nombre":"Sal","cantidad":1,"unidad":"kg"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn payload_uses_the_spanish_wire_names() {
        let draft = InternalConsumptions::draft(&summary());
        let json = serde_json::to_value(InternalConsumptions::payload(&draft)).unwrap();
        assert_eq!(json["nombre_retira"], "Pedro");
        assert_eq!(json["motivo"], "merma");
        assert_eq!(json["productos"][0]["nombre"], "Sal");
    }
}
