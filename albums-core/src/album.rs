//! Album records and the field-keyed records parsed from uploads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One parsed row from an uploaded file, keyed by header name.
pub type Record = Map<String, Value>;

/// Album row held in the listing.
///
/// Only `id` and `title` are interpreted. Every other field an upload or the
/// query carried is kept in `extra` and passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Shape of the query result the listing is seeded from: `albums.data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumsQuery {
    pub albums: AlbumPage,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub data: Vec<Album>,
}

impl AlbumsQuery {
    pub fn into_albums(self) -> Vec<Album> {
        self.albums.data
    }
}

impl Album {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Build an album from a validated record.
    ///
    /// The title and id fields are lifted out by name; the rest of the record
    /// lands in `extra`. A null or missing id stays `None`.
    pub fn from_record(mut record: Record, title_field: &str, id_field: &str) -> Self {
        let title = record
            .remove(title_field)
            .map(|v| display_value(&v))
            .unwrap_or_default();
        let id = record
            .remove(id_field)
            .filter(|v| !v.is_null())
            .map(|v| display_value(&v));

        Self {
            id,
            title,
            extra: record.into_iter().collect(),
        }
    }
}

/// JavaScript-style truthiness of a parsed cell.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a cell the way it reads in a table cell.
///
/// Whole floats print without a fractional part so a spreadsheet year of
/// `1997.0` shows as `1997`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", f as i64)
                } else {
                    f.to_string()
                }
            } else {
                n.to_string()
            }
        }
        other => other.to_string(),
    }
}
