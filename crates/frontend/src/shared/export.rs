//! CSV export with browser-side download.
//!
//! Files are written with a UTF-8 BOM and `;` as separator so Excel opens
//! them correctly with accented product and client names.

use contracts::domain::line_item::LineItem;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Implemented by rows that can land in an exported spreadsheet.
pub trait CsvExportable {
    /// Column headers, already localized.
    fn headers() -> Vec<&'static str>;

    /// One spreadsheet row for this record.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build a CSV from the given rows and trigger a download.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv_content = build_csv(data, &[])?;
    let blob = create_text_blob(&csv_content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

/// Same, with a per-product totals section appended after the rows.
pub fn export_csv_with_totals<T: CsvExportable>(
    data: &[T],
    totals: &[LineItem],
    filename: &str,
) -> Result<(), String> {
    let csv_content = build_csv(data, totals)?;
    let blob = create_text_blob(&csv_content, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

fn build_csv<T: CsvExportable>(data: &[T], totals: &[LineItem]) -> Result<String, String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    if !totals.is_empty() {
        csv_content.push('\n');
        csv_content.push_str("Totales por producto;;\n");
        for total in totals {
            csv_content.push_str(&format!(
                "{};{};{}\n",
                escape_csv_cell(&total.name),
                total.quantity,
                escape_csv_cell(&total.unit)
            ));
        }
    }

    Ok(csv_content)
}

/// Quote a cell when it carries the separator, quotes or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_text_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download a blob through a transient anchor element.
pub(crate) fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_pass_through() {
        assert_eq!(escape_csv_cell("Harina 25kg"), "Harina 25kg");
    }

    #[test]
    fn separator_and_quotes_force_quoting() {
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("dijo \"hola\""), "\"dijo \"\"hola\"\"\"");
        assert_eq!(escape_csv_cell("dos\nlíneas"), "\"dos\nlíneas\"");
    }

    struct OneCell(&'static str);

    impl CsvExportable for OneCell {
        fn headers() -> Vec<&'static str> {
            vec!["Columna"]
        }
        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string()]
        }
    }

    #[test]
    fn csv_starts_with_bom_and_headers() {
        let csv = build_csv(&[OneCell("x")], &[]).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("Columna\n"));
        assert!(csv.ends_with("x\n"));
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(build_csv::<OneCell>(&[], &[]).is_err());
    }

    #[test]
    fn totals_section_is_appended() {
        let totals = vec![LineItem {
            name: "Harina".to_string(),
            quantity: 5.5,
            unit: "kg".to_string(),
        }];
        let csv = build_csv(&[OneCell("x")], &totals).unwrap();
        assert!(csv.contains("Totales por producto"));
        assert!(csv.ends_with("Harina;5.5;kg\n"));
    }
}
