use super::headers::unique_headers;
use super::ImportError;
use crate::album::Record;
use crate::config::ListingConfig;
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use serde_json::{Number, Value};
use std::io::Cursor;

/// Read one worksheet of an XLSX workbook into records.
///
/// The first row of the sheet's used range is the header. Rows with no
/// non-empty cell are skipped and empty cells are left out of their record.
/// Numbers and booleans keep their type; dates come through as Excel serial
/// numbers.
pub fn parse_xlsx(bytes: &[u8], config: &ListingConfig) -> Result<Vec<Record>, ImportError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let sheet_index = config.xlsx.sheet_index;
    let range = workbook
        .worksheet_range_at(sheet_index)
        .ok_or(ImportError::MissingSheet(sheet_index))??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = unique_headers(header_row.iter().map(header_text));

    let records = rows
        .filter_map(|row| {
            let record: Record = headers
                .iter()
                .zip(row.iter())
                .filter_map(|(key, cell)| cell_value(cell).map(|value| (key.clone(), value)))
                .collect();
            (!record.is_empty()).then_some(record)
        })
        .collect();
    Ok(records)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(i) => Some(Value::Number((*i).into())),
        Data::Float(f) => Some(float_value(*f)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => Some(float_value(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
        Data::Error(e) => Some(Value::String(e.to_string())),
    }
}

fn float_value(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}
