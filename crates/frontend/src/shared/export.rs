//! CSV downloads: server exports relayed by the gateway, and small client-side
//! tables (dashboards).

use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::authorization_value;
use contracts::shared::url_filters::QueryParams;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::api_utils::{api_url, handle_redirect};
use crate::system::auth::storage;

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Ask the gateway for the export of `entity` and save it. `params` come from
/// `export_params`: parsed filters only, no page (exports cover every page).
pub async fn download_export(entity: &str, params: &QueryParams) -> Result<(), ApiError> {
    let url = api_url(&format!("/api/export/{}{}", entity, params.to_search()));
    log::debug!("Export: {}", url);

    let mut request = Request::get(&url);
    if let Some(token) = storage::get_token() {
        request = request.header("Authorization", &authorization_value(&token));
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let error = ApiError::from_status(response.status());
        handle_redirect(&error);
        return Err(error);
    }

    let filename = response
        .headers()
        .get("Content-Disposition")
        .and_then(|value| attachment_filename(&value))
        .unwrap_or_else(|| format!("{}.csv", entity));
    let content = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    save_csv(&content, &filename).map_err(ApiError::Network)
}

/// Build a `;`-separated CSV (with BOM for spreadsheet apps) and save it.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }
    save_csv(&build_csv(data), filename)
}

fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::from('\u{FEFF}');
    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');
    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(";"));
        csv_content.push('\n');
    }
    csv_content
}

/// Quote a cell holding the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `attachment; filename="clients-2024-05-02.csv"` → `clients-2024-05-02.csv`
fn attachment_filename(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

fn save_csv(content: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

/// Trigger a browser download through a temporary anchor
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

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

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Mes", "Total"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("simple"), "simple");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("dijo \"hola\""), "\"dijo \"\"hola\"\"\"");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[Row("05/2024", "1.500,00"), Row("06/2024", "a;b")]);
        assert_eq!(
            csv,
            "\u{FEFF}Mes;Total\n05/2024;1.500,00\n06/2024;\"a;b\"\n"
        );
    }

    #[test]
    fn test_attachment_filename() {
        assert_eq!(
            attachment_filename("attachment; filename=\"sales-2024-05-02.csv\""),
            Some("sales-2024-05-02.csv".to_string())
        );
        assert_eq!(attachment_filename("attachment"), None);
    }
}
