//! JSON file I/O with atomic writes
//!
//! A data file is either the previous version or the new one, never a
//! half-written mix: writes go to a sibling temp file that is synced and then
//! renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::error::PayablesError;

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> PayablesError {
    PayablesError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read JSON from a file; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, PayablesError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "file missing, starting empty");
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_err("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Write JSON to a file atomically, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PayablesError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_err("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("serialize", path, e))?;
    writer.flush().map_err(|e| storage_err("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("replace", path, e)
    })?;

    trace!(path = %path.display(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::models::{InvoiceRecord, Money};

    fn sample() -> Vec<InvoiceRecord> {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![InvoiceRecord::new("FAC-1", Money::from_units(1200), due)]
    }

    #[test]
    fn test_read_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let records: Vec<InvoiceRecord> = read_json(temp_dir.path().join("none.json")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("invoices.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(!temp_dir.path().join("data").join("invoices.json.tmp").exists());

        let loaded: Vec<InvoiceRecord> = read_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invoices.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Vec<InvoiceRecord>, _>(&path).unwrap_err();
        assert!(matches!(err, PayablesError::Storage(_)));
    }
}
