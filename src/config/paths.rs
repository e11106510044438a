//! Path management for payables
//!
//! ## Path Resolution Order
//!
//! 1. `PAYABLES_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/payables` on Linux, `%APPDATA%\payables` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PayablesError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "PAYABLES_DATA_DIR";

/// Manages all paths used by payables
#[derive(Debug, Clone)]
pub struct PayablesPaths {
    base_dir: PathBuf,
}

impl PayablesPaths {
    /// Create a new PayablesPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, PayablesError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PayablesPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to orders.json
    pub fn orders_file(&self) -> PathBuf {
        self.data_dir().join("orders.json")
    }

    /// Get the path to invoices.json
    pub fn invoices_file(&self) -> PathBuf {
        self.data_dir().join("invoices.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PayablesError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PayablesError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PayablesError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if payables has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PayablesError> {
    ProjectDirs::from("", "", "payables")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PayablesError::Config("Could not determine home directory".into()))
}
