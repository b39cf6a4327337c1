//! Ledger settings
//!
//! Presentation-level preferences for a budget: the name given to the
//! To Be Budgeted category and the currency symbol used when formatting
//! amounts. Stored as JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LedgerError;

/// User settings for a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name of the category that holds unassigned money
    #[serde(default = "default_tbb_category_name")]
    pub tbb_category_name: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tbb_category_name() -> String {
    "To Be Budgeted".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tbb_category_name: default_tbb_category_name(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document; missing fields take defaults
    pub fn from_json(contents: &str) -> Result<Self, LedgerError> {
        serde_json::from_str(contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings: {}", e)))
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, LedgerError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        Self::from_json(&contents)
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.tbb_category_name, "To Be Budgeted");
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config").join("settings.json");

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.tbb_category_name = "Ready to Assign".into();
        settings.save(&path).unwrap();

        let loaded = Settings::load_or_default(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_default(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let settings = Settings::from_json(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.tbb_category_name, "To Be Budgeted");
    }

    #[test]
    fn test_malformed_document() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
