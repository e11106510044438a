//! User settings for payables
//!
//! Manages display preferences, the due-soon window and the storage backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::PayablesPaths;
use crate::calendar::classifier::DUE_SOON_DAYS;
use crate::error::PayablesError;
use crate::models::format_date;

/// Where order and invoice records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON files under the data directory (default)
    #[default]
    File,
    /// Process-local store, nothing is persisted
    Memory,
}

/// User settings for payables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many days ahead (inclusive) an unpaid item counts as due soon
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: i64,

    #[serde(default)]
    pub storage_backend: StorageBackend,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_due_soon_days() -> i64 {
    DUE_SOON_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            due_soon_days: default_due_soon_days(),
            storage_backend: StorageBackend::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PayablesPaths) -> Result<Self, PayablesError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PayablesError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PayablesError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would make classification or date display fail
    pub fn validate(&self) -> Result<(), PayablesError> {
        if self.due_soon_days < 0 {
            return Err(PayablesError::Config(format!(
                "due_soon_days must not be negative (got {})",
                self.due_soon_days
            )));
        }
        if format_date(NaiveDate::default(), &self.date_format).is_none() {
            return Err(PayablesError::Config(format!(
                "date_format '{}' is not a valid date pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PayablesPaths) -> Result<(), PayablesError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PayablesError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PayablesError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
