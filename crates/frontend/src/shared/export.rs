/// Spreadsheet export: fixed column mappings turn the current derived
/// view into a downloadable .xlsx file.
use rust_xlsxwriter::Workbook;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// One output column: header plus an accessor over the record. The
/// accessor also receives the row index for numbering columns and must
/// substitute a placeholder for missing nested data instead of panicking.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(usize, &T) -> String,
}

/// Pure transform from records to cell rows. Row count always equals the
/// input count.
pub fn build_rows<T>(records: &[T], columns: &[Column<T>]) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| columns.iter().map(|col| (col.cell)(index, record)).collect())
        .collect()
}

/// Build a workbook from the given view and trigger a browser download.
pub fn export_xlsx<T>(
    records: &[T],
    columns: &[Column<T>],
    file_name: &str,
    sheet_name: &str,
) -> Result<(), String> {
    if records.is_empty() {
        return Err("No data to export".to_string());
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("Failed to name sheet: {}", e))?;

    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, column.header)
            .map_err(|e| format!("Failed to write header: {}", e))?;
    }

    for (row, cells) in build_rows(records, columns).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string((row + 1) as u32, col as u16, cell)
                .map_err(|e| format!("Failed to write cell: {}", e))?;
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| format!("Failed to build workbook: {}", e))?;

    let blob = create_xlsx_blob(&buffer)?;
    download_blob(&blob, file_name)
}

fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download via a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
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

    struct Record {
        name: &'static str,
        related: Option<&'static str>,
    }

    fn columns() -> Vec<Column<Record>> {
        vec![
            Column {
                header: "No",
                cell: |index, _| (index + 1).to_string(),
            },
            Column {
                header: "Name",
                cell: |_, r| r.name.to_string(),
            },
            Column {
                header: "Related",
                cell: |_, r| r.related.map(String::from).unwrap_or_else(|| "-".to_string()),
            },
        ]
    }

    #[test]
    fn row_count_matches_input() {
        let records = vec![
            Record { name: "a", related: Some("x") },
            Record { name: "b", related: None },
            Record { name: "c", related: Some("y") },
        ];
        let rows = build_rows(&records, &columns());
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn missing_relation_becomes_placeholder() {
        let records = vec![Record { name: "b", related: None }];
        let rows = build_rows(&records, &columns());
        assert_eq!(rows[0], vec!["1", "b", "-"]);
    }

    #[test]
    fn numbering_column_counts_from_one() {
        let records = vec![
            Record { name: "a", related: None },
            Record { name: "b", related: None },
        ];
        let rows = build_rows(&records, &columns());
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[1][0], "2");
    }
}
