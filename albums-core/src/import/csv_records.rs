use super::headers::unique_headers;
use super::ImportError;
use crate::album::Record;
use crate::config::ListingConfig;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::Value;

/// Key holding the cells of rows longer than the header row
const EXTRA_FIELDS_KEY: &str = "__parsed_extra";

/// Parse CSV text with a header row into records.
///
/// Empty lines are skipped. Rows shorter than the header omit the missing
/// fields; surplus cells are collected under `__parsed_extra`. Every value is
/// a string, no type coercion happens here.
pub fn parse_csv(text: &str, config: &ListingConfig) -> Result<Vec<Record>, ImportError> {
    let trim = if config.csv.trim { Trim::All } else { Trim::None };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(config.csv_delimiter())
        .trim(trim)
        .from_reader(text.as_bytes());

    let headers = unique_headers(reader.headers()?.iter());

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if is_blank_line(&row) {
            continue;
        }
        records.push(to_record(&headers, &row));
    }
    Ok(records)
}

fn is_blank_line(row: &StringRecord) -> bool {
    row.len() == 1 && row.get(0).is_some_and(|cell| cell.is_empty())
}

fn to_record(headers: &[String], row: &StringRecord) -> Record {
    let mut record = Record::new();
    for (key, cell) in headers.iter().zip(row.iter()) {
        record.insert(key.clone(), Value::String(cell.to_string()));
    }
    if row.len() > headers.len() {
        let extra = row
            .iter()
            .skip(headers.len())
            .map(|cell| Value::String(cell.to_string()))
            .collect();
        record.insert(EXTRA_FIELDS_KEY.to_string(), Value::Array(extra));
    }
    record
}
