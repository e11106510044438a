//! Storage layer for payables
//!
//! Orders and invoices live in JSON files under the data directory, written
//! atomically. The same repositories can run purely in memory.

pub mod file_io;
#[cfg(test)]
pub mod memory;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
#[cfg(test)]
pub use memory::MemoryStore;
pub use repository::{InvoiceRepository, OrderRepository, Record, Repository};

use tracing::{debug, info};

use crate::config::{PayablesPaths, Settings, StorageBackend};
use crate::error::PayablesResult;
use crate::models::{InvoiceRecord, OrderRecord};

/// Anything the payment calendar can read records from
pub trait PayableSource {
    fn list_orders(&self) -> PayablesResult<Vec<OrderRecord>>;
    fn list_invoices(&self) -> PayablesResult<Vec<InvoiceRecord>>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: Option<PayablesPaths>,
    pub orders: OrderRepository,
    pub invoices: InvoiceRepository,
}

impl Storage {
    /// Create file-backed storage, creating the data directory if needed
    pub fn new(paths: PayablesPaths) -> PayablesResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            orders: OrderRepository::new(paths.orders_file()),
            invoices: InvoiceRepository::new(paths.invoices_file()),
            paths: Some(paths),
        })
    }

    /// Create storage that keeps everything in memory
    pub fn in_memory() -> Self {
        Self {
            paths: None,
            orders: OrderRepository::in_memory(),
            invoices: InvoiceRepository::in_memory(),
        }
    }

    /// Open storage for the configured backend and load existing records
    pub fn open(paths: PayablesPaths, settings: &Settings) -> PayablesResult<Self> {
        let storage = match settings.storage_backend {
            StorageBackend::File => Self::new(paths)?,
            StorageBackend::Memory => {
                info!("using in-memory storage, changes will not be persisted");
                Self::in_memory()
            }
        };
        storage.load_all()?;
        Ok(storage)
    }

    /// Data paths, `None` for in-memory storage
    pub fn paths(&self) -> Option<&PayablesPaths> {
        self.paths.as_ref()
    }

    pub fn is_persistent(&self) -> bool {
        self.paths.is_some()
    }

    /// Load all data from disk
    pub fn load_all(&self) -> PayablesResult<()> {
        self.orders.load()?;
        self.invoices.load()?;
        debug!(
            orders = self.orders.count()?,
            invoices = self.invoices.count()?,
            "storage loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> PayablesResult<()> {
        self.orders.save()?;
        self.invoices.save()?;
        Ok(())
    }
}

impl PayableSource for Storage {
    fn list_orders(&self) -> PayablesResult<Vec<OrderRecord>> {
        self.orders.get_all()
    }

    fn list_invoices(&self) -> PayablesResult<Vec<InvoiceRecord>> {
        self.invoices.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PayablesPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.is_persistent());
    }

    #[test]
    fn test_open_memory_backend_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("payables");
        let paths = PayablesPaths::with_base_dir(base.clone());
        let settings = Settings {
            storage_backend: StorageBackend::Memory,
            ..Settings::default()
        };

        let storage = Storage::open(paths, &settings).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        storage
            .orders
            .create(OrderRecord::new("CMD-1", Money::from_units(5), due))
            .unwrap();
        storage.save_all().unwrap();

        assert!(!storage.is_persistent());
        assert!(!base.exists());
        assert_eq!(storage.list_orders().unwrap().len(), 1);
    }

    #[test]
    fn test_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PayablesPaths::with_base_dir(temp_dir.path().to_path_buf());
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let storage = Storage::open(paths.clone(), &Settings::default()).unwrap();
        storage
            .invoices
            .create(InvoiceRecord::new("FAC-1", Money::from_units(1200), due))
            .unwrap();
        storage.save_all().unwrap();

        let reopened = Storage::open(paths, &Settings::default()).unwrap();
        assert_eq!(reopened.list_invoices().unwrap().len(), 1);
        assert!(reopened.list_orders().unwrap().is_empty());
    }
}
