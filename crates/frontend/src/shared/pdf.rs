//! PDF receipt downloads.
//!
//! The backend renders the documents; the frontend only turns the bytes
//! into a blob and hands it to the browser.

use js_sys::Uint8Array;
use web_sys::{Blob, BlobPropertyBag};

use crate::shared::export::download_blob;

/// Wrap PDF bytes in a blob and trigger a download under `filename`.
pub fn download_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = pdf_blob(bytes)?;
    download_blob(&blob, filename)
}

/// Open the PDF in a new window and ask the browser to print it.
pub fn print_pdf(bytes: &[u8]) -> Result<(), String> {
    let blob = pdf_blob(bytes)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let opened = window
        .open_with_url(&url)
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Popup blocked")?;
    let _ = opened.print();
    Ok(())
}

fn pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}
