use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

fn default_title_field() -> String {
    "title".to_string()
}

fn default_id_field() -> String {
    "id".to_string()
}

fn default_accept() -> String {
    ".csv,.xlsx".to_string()
}

fn default_delimiter() -> char {
    ','
}

/// CSV parsing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Field delimiter. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Trim whitespace around every field and header
    #[serde(default)]
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim: false,
        }
    }
}

/// XLSX parsing options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XlsxOptions {
    /// Worksheet to read records from. Defaults to the first one.
    #[serde(default)]
    pub sheet_index: usize,
}

/// Listing configuration, usually embedded as `albums.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Record field shown as the album title and required by validation
    #[serde(default = "default_title_field")]
    pub title_field: String,
    /// Record field used as the album identity
    #[serde(default = "default_id_field")]
    pub id_field: String,
    /// `accept` attribute of the file input
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default)]
    pub csv: CsvOptions,
    #[serde(default)]
    pub xlsx: XlsxOptions,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            title_field: default_title_field(),
            id_field: default_id_field(),
            accept: default_accept(),
            csv: CsvOptions::default(),
            xlsx: XlsxOptions::default(),
        }
    }
}

impl ListingConfig {
    /// Parse a YAML document. Missing keys fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: ListingConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        config.validate()?;
        info!(
            "Loaded listing config (title field '{}', accept '{}')",
            config.title_field, config.accept
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.title_field.trim().is_empty() {
            return Err(ConfigError::Config("title_field must not be empty".into()));
        }
        if !self.csv.delimiter.is_ascii() {
            return Err(ConfigError::Config(format!(
                "csv delimiter '{}' is not ASCII",
                self.csv.delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn csv_delimiter(&self) -> u8 {
        self.csv.delimiter as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ListingConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ListingConfig::default());
        assert_eq!(config.csv_delimiter(), b',');
    }

    #[test]
    fn partial_document_overrides() {
        let yaml = "title_field: name\ncsv:\n  delimiter: ';'\n  trim: true\n";
        let config = ListingConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.title_field, "name");
        assert_eq!(config.id_field, "id");
        assert_eq!(config.csv_delimiter(), b';');
        assert!(config.csv.trim);
        assert_eq!(config.xlsx.sheet_index, 0);
    }

    #[test]
    fn rejects_blank_title_field() {
        assert!(matches!(
            ListingConfig::from_yaml_str("title_field: ''"),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn rejects_non_ascii_delimiter() {
        assert!(matches!(
            ListingConfig::from_yaml_str("csv:\n  delimiter: '§'\n"),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            ListingConfig::from_yaml_str("title_field: [unclosed"),
            Err(ConfigError::Serialization(_))
        ));
    }
}
