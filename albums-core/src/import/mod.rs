//! Bulk import: file kind dispatch, parsing and validation
//!
//! An uploaded file becomes an ordered list of field-keyed [`Record`]s, which
//! [`validate_data`] filters down to the ones carrying a truthy title before
//! they are turned into preview [`Album`]s.

mod csv_records;
mod headers;
mod text_encoding;
mod xlsx_records;

pub use csv_records::parse_csv;
pub use text_encoding::decode_text;
pub use xlsx_records::parse_xlsx;

use crate::album::{is_truthy, Album, Record};
use crate::config::ListingConfig;
use thiserror::Error;
use tracing::debug;

/// Import errors
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX read error: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("Workbook has no worksheet at index {0}")]
    MissingSheet(usize),
}

/// What parser an uploaded file is routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
    /// Anything else. Parses to nothing.
    Unsupported,
}

impl FileKind {
    /// Classify by the text after the last `.` of the file name.
    ///
    /// A name without a dot is its own extension, and matching is
    /// case-sensitive: `albums.CSV` is unsupported.
    pub fn from_file_name(name: &str) -> Self {
        let extension = name.rsplit('.').next().unwrap_or(name);
        match extension {
            "csv" => FileKind::Csv,
            "xlsx" => FileKind::Xlsx,
            _ => FileKind::Unsupported,
        }
    }
}

/// A file the user picked in the import control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub kind: FileKind,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = FileKind::from_file_name(&name);
        Self { name, kind }
    }
}

/// Parse file contents into raw records according to the file kind
pub fn parse_records(
    kind: FileKind,
    bytes: &[u8],
    config: &ListingConfig,
) -> Result<Vec<Record>, ImportError> {
    match kind {
        FileKind::Csv => parse_csv(&decode_text(bytes), config),
        FileKind::Xlsx => parse_xlsx(bytes, config),
        FileKind::Unsupported => Ok(Vec::new()),
    }
}

/// Keep only records whose title field is truthy. Nothing else is checked.
pub fn validate_data(records: Vec<Record>, title_field: &str) -> Vec<Record> {
    let total = records.len();
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|record| record.get(title_field).is_some_and(is_truthy))
        .collect();
    debug!(
        "Validation kept {} of {} records ({} without '{}')",
        kept.len(),
        total,
        total - kept.len(),
        title_field
    );
    kept
}

/// Parse, validate and convert an uploaded file into preview albums
pub fn read_albums(
    file: &SelectedFile,
    bytes: &[u8],
    config: &ListingConfig,
) -> Result<Vec<Album>, ImportError> {
    let records = parse_records(file.kind, bytes, config)?;
    debug!("Parsed {} records from {}", records.len(), file.name);
    Ok(validate_data(records, &config.title_field)
        .into_iter()
        .map(|record| Album::from_record(record, &config.title_field, &config.id_field))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_from_extension() {
        assert_eq!(FileKind::from_file_name("albums.csv"), FileKind::Csv);
        assert_eq!(FileKind::from_file_name("backup.2024.xlsx"), FileKind::Xlsx);
        assert_eq!(FileKind::from_file_name("albums.CSV"), FileKind::Unsupported);
        assert_eq!(FileKind::from_file_name("albums.txt"), FileKind::Unsupported);
        assert_eq!(FileKind::from_file_name("csv"), FileKind::Csv);
        assert_eq!(FileKind::from_file_name("albums."), FileKind::Unsupported);
    }

    #[test]
    fn validate_drops_falsy_titles() {
        let records: Vec<Record> = [
            json!({"title": "Blue", "id": "1"}),
            json!({"title": "", "id": "2"}),
            json!({"id": "3"}),
            json!({"title": 0}),
            json!({"title": null}),
            json!({"title": 1971}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect();

        let kept = validate_data(records, "title");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0]["id"], json!("1"));
        assert_eq!(kept[1]["title"], json!(1971));
    }

    #[test]
    fn unsupported_files_parse_to_nothing() {
        let file = SelectedFile::new("cover.png");
        let albums = read_albums(&file, b"title\nNot parsed", &ListingConfig::default()).unwrap();
        assert!(albums.is_empty());
    }

    #[test]
    fn read_albums_uses_configured_fields() {
        let config = ListingConfig {
            title_field: "name".into(),
            id_field: "code".into(),
            ..Default::default()
        };
        let file = SelectedFile::new("albums.csv");
        let albums = read_albums(&file, b"code,name\nx9,Moanin'\nx10,\n", &config).unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].id.as_deref(), Some("x9"));
        assert_eq!(albums[0].title, "Moanin'");
    }
}
