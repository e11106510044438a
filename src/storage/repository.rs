//! Record repository backed by a JSON file (or by nothing, in memory)
//!
//! Orders and invoices share the same persistence needs: lookup by ID, lookup
//! by human-facing number, create/update/delete, and a stable on-disk order.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use super::file_io::{read_json, write_json_atomic};
use crate::error::PayablesError;
use crate::models::{InvoiceId, InvoiceRecord, OrderId, OrderRecord};

/// A storable record with an ID and a unique number
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Entity name used in errors ("Order", "Invoice")
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
    fn number(&self) -> &str;
    fn due_date(&self) -> NaiveDate;
}

impl Record for OrderRecord {
    type Id = OrderId;
    const ENTITY: &'static str = "Order";

    fn id(&self) -> OrderId {
        self.id
    }

    fn number(&self) -> &str {
        &self.order_number
    }

    fn due_date(&self) -> NaiveDate {
        self.payment_due_date
    }
}

impl Record for InvoiceRecord {
    type Id = InvoiceId;
    const ENTITY: &'static str = "Invoice";

    fn id(&self) -> InvoiceId {
        self.id
    }

    fn number(&self) -> &str {
        &self.invoice_number
    }

    fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

fn normalize_number(number: &str) -> String {
    number.trim().to_lowercase()
}

fn sort_records<R: Record>(records: &mut [R]) {
    records.sort_by(|a, b| {
        a.due_date()
            .cmp(&b.due_date())
            .then_with(|| a.number().cmp(b.number()))
    });
}

struct Inner<R: Record> {
    records: HashMap<R::Id, R>,
    /// Index: normalized number -> id
    by_number: HashMap<String, R::Id>,
}

impl<R: Record> Default for Inner<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            by_number: HashMap::new(),
        }
    }
}

/// Repository for one record type
pub struct Repository<R: Record> {
    /// `None` keeps the records in memory only
    path: Option<PathBuf>,
    inner: RwLock<Inner<R>>,
}

pub type OrderRepository = Repository<OrderRecord>;
pub type InvoiceRepository = Repository<InvoiceRecord>;

impl<R: Record> Repository<R> {
    /// Create a repository persisted at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a repository that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            path: None,
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner<R>>, PayablesError> {
        self.inner
            .read()
            .map_err(|e| PayablesError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner<R>>, PayablesError> {
        self.inner
            .write()
            .map_err(|e| PayablesError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load records from disk and rebuild the number index
    #[instrument(skip(self), fields(entity = R::ENTITY))]
    pub fn load(&self) -> Result<(), PayablesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let records: Vec<R> = read_json(path)?;

        let mut inner = self.write()?;
        inner.records.clear();
        inner.by_number.clear();
        for record in records {
            inner
                .by_number
                .insert(normalize_number(record.number()), record.id());
            inner.records.insert(record.id(), record);
        }

        debug!(count = inner.records.len(), "loaded records");
        Ok(())
    }

    /// Save records to disk, ordered by due date then number
    #[instrument(skip(self), fields(entity = R::ENTITY))]
    pub fn save(&self) -> Result<(), PayablesError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let records = self.get_all()?;
        write_json_atomic(path, &records)
    }

    pub fn get(&self, id: R::Id) -> Result<Option<R>, PayablesError> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    /// Get a record by number (case-insensitive)
    pub fn get_by_number(&self, number: &str) -> Result<Option<R>, PayablesError> {
        let inner = self.read()?;
        Ok(inner
            .by_number
            .get(&normalize_number(number))
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    /// All records, ordered by due date then number
    pub fn get_all(&self) -> Result<Vec<R>, PayablesError> {
        let mut records: Vec<R> = self.read()?.records.values().cloned().collect();
        sort_records(&mut records);
        Ok(records)
    }

    /// Insert a new record, rejecting a number that is already taken
    pub fn create(&self, record: R) -> Result<(), PayablesError> {
        let mut inner = self.write()?;
        let key = normalize_number(record.number());

        if inner.records.contains_key(&record.id()) || inner.by_number.contains_key(&key) {
            return Err(PayablesError::Duplicate {
                entity_type: R::ENTITY,
                identifier: record.number().to_string(),
            });
        }

        inner.by_number.insert(key, record.id());
        inner.records.insert(record.id(), record);
        Ok(())
    }

    /// Replace an existing record
    pub fn update(&self, record: R) -> Result<(), PayablesError> {
        let mut inner = self.write()?;
        let key = normalize_number(record.number());

        let old_key = match inner.records.get(&record.id()) {
            Some(old) => normalize_number(old.number()),
            None => {
                return Err(PayablesError::NotFound {
                    entity_type: R::ENTITY,
                    identifier: record.id().to_string(),
                })
            }
        };

        if let Some(other) = inner.by_number.get(&key) {
            if *other != record.id() {
                return Err(PayablesError::Duplicate {
                    entity_type: R::ENTITY,
                    identifier: record.number().to_string(),
                });
            }
        }

        inner.by_number.remove(&old_key);
        inner.by_number.insert(key, record.id());
        inner.records.insert(record.id(), record);
        Ok(())
    }

    /// Delete a record; returns whether anything was removed
    pub fn delete(&self, id: R::Id) -> Result<bool, PayablesError> {
        let mut inner = self.write()?;
        match inner.records.remove(&id) {
            Some(record) => {
                inner.by_number.remove(&normalize_number(record.number()));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn count(&self) -> Result<usize, PayablesError> {
        Ok(self.read()?.records.len())
    }
}
