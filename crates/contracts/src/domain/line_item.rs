use serde::{Deserialize, Serialize};

/// Measurement units the backend accepts, as `(wire value, label)` pairs.
pub const UNITS: &[(&str, &str)] = &[
    ("unidades", "Unidades"),
    ("kg", "Kilogramos"),
    ("lt", "Litros"),
    ("cajas", "Cajas"),
    ("PQT", "Paquetes"),
];

pub const DEFAULT_UNIT: &str = "unidades";

/// One product line inside a dispatch, credit note, production run,
/// receipt or internal consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: String,
}

impl LineItem {
    /// Blank row as created by the "add product" button in an edit form.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            quantity: 0.0,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    /// Copy reduced to exactly the `{nombre, cantidad, unidad}` shape the
    /// update endpoints expect.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
        }
    }
}

/// Aggregate quantities by `(name, unit)`, preserving first-seen order.
/// Used by the CSV exports' totals section.
pub fn totals<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::new();
    for item in items {
        match out
            .iter_mut()
            .find(|t| t.name == item.name && t.unit == item.unit)
        {
            Some(total) => total.quantity += item.quantity,
            None => out.push(item.normalized()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_spanish_field_names() {
        let item = LineItem {
            name: "Harina".to_string(),
            quantity: 2.5,
            unit: "kg".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["nombre"], "Harina");
        assert_eq!(json["cantidad"], 2.5);
        assert_eq!(json["unidad"], "kg");
    }

    #[test]
    fn totals_group_by_name_and_unit() {
        let items = vec![
            LineItem { name: "Harina".into(), quantity: 2.0, unit: "kg".into() },
            LineItem { name: "Sal".into(), quantity: 1.0, unit: "kg".into() },
            LineItem { name: "Harina".into(), quantity: 3.5, unit: "kg".into() },
            LineItem { name: "Harina".into(), quantity: 1.0, unit: "cajas".into() },
        ];
        let totals = totals(&items);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].name, "Harina");
        assert_eq!(totals[0].quantity, 5.5);
        assert_eq!(totals[2].unit, "cajas");
    }

    #[test]
    fn blank_row_uses_default_unit() {
        let row = LineItem::blank();
        assert_eq!(row.unit, DEFAULT_UNIT);
        assert_eq!(row.quantity, 0.0);
        assert!(row.name.is_empty());
    }
}
