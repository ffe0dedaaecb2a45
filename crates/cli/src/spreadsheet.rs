//! Attendee spreadsheet parsing.
//!
//! Mirrors the dashboard's client-side pipeline: extension check, workbook
//! parse, empty-sheet check, required-column check, then row conversion.
//! Every failure here is reported before any network call is made.
//!
//! Rows are converted into loose JSON objects rather than typed records so
//! extra spreadsheet columns travel to the server untouched (the server
//! ignores unknown keys); empty cells are simply omitted from the object.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use doorlist_core::columns;

/// One spreadsheet row as a JSON object keyed by header name.
pub type Row = Map<String, Value>;

/// Errors that stop processing before any network call.
#[derive(Debug, Error)]
pub enum SpreadsheetError {
    /// Not an Excel file.
    #[error("Invalid file type. Please upload an Excel file (.xlsx, .xls).")]
    InvalidExtension,

    /// The workbook has no sheet or the first sheet has no data rows.
    #[error("The uploaded file is empty or has no data.")]
    Empty,

    /// Required columns absent from the header row, in canonical order.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    /// The workbook could not be read.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
}

/// Parse an attendee spreadsheet into upload-ready rows.
///
/// Only the first sheet is read, matching the dashboard behavior.
///
/// # Errors
///
/// Returns [`SpreadsheetError`] if the extension is not `.xlsx`/`.xls`,
/// the workbook cannot be read, the sheet has no data rows, or any
/// required column is missing from the header row.
pub fn read_attendee_rows(path: &Path) -> Result<Vec<Row>, SpreadsheetError> {
    if !has_excel_extension(path) {
        return Err(SpreadsheetError::InvalidExtension);
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SpreadsheetError::Empty)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    rows_from_range(&range)
}

fn has_excel_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("xlsx" | "xls")
    )
}

/// Convert a worksheet range into row objects.
///
/// The first row is the header row; its key set must be a superset of
/// [`columns::REQUIRED_COLUMNS`]. Blank data rows are skipped.
pub(crate) fn rows_from_range(range: &Range<Data>) -> Result<Vec<Row>, SpreadsheetError> {
    let mut row_iter = range.rows();
    let header_row = row_iter.next().ok_or(SpreadsheetError::Empty)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for data_row in row_iter {
        let mut object = Map::new();
        for (header, cell) in headers.iter().zip(data_row) {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = cell_to_json(cell) {
                object.insert(header.clone(), value);
            }
        }
        if !object.is_empty() {
            rows.push(object);
        }
    }

    if rows.is_empty() {
        return Err(SpreadsheetError::Empty);
    }

    let named: Vec<&String> = headers.iter().filter(|h| !h.is_empty()).collect();
    let missing = columns::missing_columns(&named);
    if !missing.is_empty() {
        return Err(SpreadsheetError::MissingColumns(missing));
    }

    Ok(rows)
}

/// Map a cell to JSON, or `None` for cells that contribute no key.
///
/// Whole floats become integers: Excel stores `2026` as `2026.0`, and the
/// server's integer columns reject floating-point JSON.
#[allow(clippy::cast_possible_truncation)]
fn cell_to_json(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_owned()))
            }
        }
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                Some(Value::Number(Number::from(*f as i64)))
            } else {
                Number::from_f64(*f).map(Value::Number)
            }
        }
        Data::Int(i) => Some(Value::Number(Number::from(*i))),
        Data::Bool(b) => Some(Value::Bool(*b)),
        other => {
            let s = other.to_string();
            if s.is_empty() {
                None
            } else {
                Some(Value::String(s))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn range_of(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Range::empty();
        }
        #[allow(clippy::cast_possible_truncation)]
        let mut range = Range::new((0, 0), (height as u32 - 1, width as u32 - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    fn full_header() -> Vec<Data> {
        vec![
            Data::String("Name".into()),
            Data::String("Year".into()),
            Data::String("Amount paid".into()),
            Data::String("Balance need to pay".into()),
            Data::String("Email".into()),
        ]
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let err = read_attendee_rows(Path::new("attendees.csv")).unwrap_err();
        assert!(matches!(err, SpreadsheetError::InvalidExtension));

        let err = read_attendee_rows(Path::new("attendees")).unwrap_err();
        assert!(matches!(err, SpreadsheetError::InvalidExtension));
    }

    #[test]
    fn test_empty_sheet() {
        let err = rows_from_range(&range_of(vec![])).unwrap_err();
        assert!(matches!(err, SpreadsheetError::Empty));

        // Header only, no data rows.
        let err = rows_from_range(&range_of(vec![full_header()])).unwrap_err();
        assert!(matches!(err, SpreadsheetError::Empty));
    }

    #[test]
    fn test_missing_columns_named_exactly() {
        let rows = vec![
            vec![
                Data::String("Name".into()),
                Data::String("Year".into()),
                Data::String("Email".into()),
            ],
            vec![
                Data::String("Ada".into()),
                Data::Float(2026.0),
                Data::String("ada@example.com".into()),
            ],
        ];
        let err = rows_from_range(&range_of(rows)).unwrap_err();
        match err {
            SpreadsheetError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["Amount paid", "Balance need to pay"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_become_json_objects() {
        let rows = vec![
            full_header(),
            vec![
                Data::String("Ada".into()),
                Data::Float(2026.0),
                Data::Float(100.0),
                Data::Float(0.0),
                Data::String("ada@example.com".into()),
            ],
        ];
        let parsed = rows_from_range(&range_of(rows)).unwrap();
        assert_eq!(parsed.len(), 1);
        let row = &parsed[0];
        assert_eq!(row["Name"], Value::String("Ada".into()));
        // Whole floats are integers on the wire.
        assert_eq!(row["Year"], Value::Number(2026.into()));
        assert_eq!(row["Amount paid"], Value::Number(100.into()));
        assert_eq!(row["Email"], Value::String("ada@example.com".into()));
    }

    #[test]
    fn test_empty_cells_are_omitted_and_blank_rows_skipped() {
        let mut header = full_header();
        header.push(Data::String("Description".into()));
        let rows = vec![
            header,
            vec![
                Data::String("Ada".into()),
                Data::Float(2026.0),
                Data::Float(100.0),
                Data::Float(0.0),
                Data::String("ada@example.com".into()),
                Data::Empty,
            ],
            vec![Data::Empty; 6],
        ];
        let parsed = rows_from_range(&range_of(rows)).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(!parsed[0].contains_key("Description"));
    }

    #[test]
    fn test_fractional_amounts_stay_fractional() {
        let rows = vec![
            full_header(),
            vec![
                Data::String("Ada".into()),
                Data::Float(2026.0),
                Data::Float(99.5),
                Data::Float(0.5),
                Data::String("ada@example.com".into()),
            ],
        ];
        let parsed = rows_from_range(&range_of(rows)).unwrap();
        assert_eq!(parsed[0]["Amount paid"], serde_json::json!(99.5));
    }
}
