//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SecrimpoError};

/// Main configuration for secrimpo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecrimpoConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Replace a bare law abbreviation ("CP", "LCP") with the law's full name.
    pub expand_law_names: bool,

    /// Report the fields that could not be resolved.
    pub report_missing_fields: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            expand_law_names: false,
            report_missing_fields: true,
        }
    }
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON object.
    #[default]
    Json,
    /// Single-row CSV with a header.
    Csv,
    /// Human-readable summary.
    Text,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Emit the canonical form keys instead of the raw field map.
    pub form_mapping: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
            form_mapping: false,
        }
    }
}

impl SecrimpoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SecrimpoError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SecrimpoConfig::default();
        assert!(!config.extraction.expand_law_names);
        assert!(config.extraction.report_missing_fields);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.form_mapping);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SecrimpoConfig =
            serde_json::from_str(r#"{"output": {"format": "csv"}}"#).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(!config.output.pretty);
        assert!(config.extraction.report_missing_fields);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SecrimpoConfig::default();
        config.extraction.expand_law_names = true;
        config.output.pretty = true;
        config.save(&path).unwrap();

        let loaded = SecrimpoConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = SecrimpoConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, SecrimpoError::Config(_)));
    }
}
