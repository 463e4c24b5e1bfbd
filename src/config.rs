//! YAML configuration for the `to-geojson` conversion
//!
//! ```yaml
//! excel:
//!   file: "data.xlsx"
//!   sheet: "Sheet1"
//!   columns:
//!     name: "A"
//!     description: "B"
//!     coordinates: "C"
//!   start_row: 2
//! geojson:
//!   input: "base.geojson"
//!   output: "result.geojson"
//! appearance:
//!   marker_color: "#FF0000"
//! ```

use crate::error::{ConvertError, ConvertResult};
use crate::excel::column_index;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub excel: ExcelSection,
    pub geojson: GeojsonSection,
    #[serde(default)]
    pub appearance: AppearanceSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcelSection {
    pub file: PathBuf,
    pub sheet: String,
    pub columns: ColumnSelection,
    /// 1-based row where data begins
    #[serde(default = "default_start_row")]
    pub start_row: u32,
}

/// Column letters for the three record fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnSelection {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub coordinates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeojsonSection {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppearanceSection {
    #[serde(default)]
    pub marker_color: String,
}

fn default_start_row() -> u32 {
    2
}

impl Config {
    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Io(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_yaml(content: &str) -> ConvertResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConvertResult<()> {
        if self.excel.file.as_os_str().is_empty() {
            return Err(ConvertError::Config("excel.file is required".to_string()));
        }
        if self.excel.sheet.trim().is_empty() {
            return Err(ConvertError::Config("excel.sheet is required".to_string()));
        }
        if self.excel.columns.coordinates.trim().is_empty() {
            return Err(ConvertError::Config(
                "excel.columns.coordinates is required".to_string(),
            ));
        }
        self.excel.columns.validate()?;
        if self.excel.start_row == 0 {
            return Err(ConvertError::Config(
                "excel.start_row is 1-based and must be at least 1".to_string(),
            ));
        }
        if self.geojson.input.as_os_str().is_empty() {
            return Err(ConvertError::Config("geojson.input is required".to_string()));
        }
        if self.geojson.output.as_os_str().is_empty() {
            return Err(ConvertError::Config(
                "geojson.output is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Configured marker color, if one was given
    pub fn marker_color(&self) -> Option<&str> {
        let color = self.appearance.marker_color.trim();
        (!color.is_empty()).then_some(color)
    }
}

impl ColumnSelection {
    pub fn new(name: &str, description: &str, coordinates: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            coordinates: coordinates.to_string(),
        }
    }

    /// Check that every non-empty letter names a real column
    pub fn validate(&self) -> ConvertResult<()> {
        for (role, letter) in [
            ("name", &self.name),
            ("description", &self.description),
            ("coordinates", &self.coordinates),
        ] {
            if !letter.trim().is_empty() {
                column_index(letter).map_err(|_| {
                    ConvertError::Config(format!("Invalid {} column '{}'", role, letter))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_CONFIG: &str = r##"
excel:
  file: "data.xlsx"
  sheet: "Sheet1"
  columns:
    name: "A"
    description: "B"
    coordinates: "C"
  start_row: 3
geojson:
  input: "base.geojson"
  output: "result.geojson"
appearance:
  marker_color: "#FF0000"
"##;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml(FULL_CONFIG).unwrap();
        assert_eq!(config.excel.file, PathBuf::from("data.xlsx"));
        assert_eq!(config.excel.sheet, "Sheet1");
        assert_eq!(config.excel.columns, ColumnSelection::new("A", "B", "C"));
        assert_eq!(config.excel.start_row, 3);
        assert_eq!(config.geojson.output, PathBuf::from("result.geojson"));
        assert_eq!(config.marker_color(), Some("#FF0000"));
    }

    #[test]
    fn test_optional_fields_default() {
        let yaml = r#"
excel:
  file: "data.xlsx"
  sheet: "Points"
  columns:
    coordinates: "D"
geojson:
  input: "in.geojson"
  output: "out.geojson"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.excel.start_row, 2);
        assert_eq!(config.excel.columns.name, "");
        assert_eq!(config.marker_color(), None);
    }

    #[test]
    fn test_missing_coordinates_column_rejected() {
        let yaml = FULL_CONFIG.replace(r#"coordinates: "C""#, r#"coordinates: """#);
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
    }

    #[test]
    fn test_invalid_column_letter_rejected() {
        let yaml = FULL_CONFIG.replace(r#"name: "A""#, r#"name: "A1""#);
        let err = Config::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("name column"));
    }

    #[test]
    fn test_zero_start_row_rejected() {
        let yaml = FULL_CONFIG.replace("start_row: 3", "start_row: 0");
        assert!(matches!(
            Config::from_yaml(&yaml),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = Config::from_yaml("excel: [unterminated").unwrap_err();
        assert!(matches!(err, ConvertError::Yaml(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
