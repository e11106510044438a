//! Fixture record source for unit tests
//!
//! Holds orders and invoices in plain vectors and hands them out unsorted,
//! so calendar code can be tested against input order. The `memory` storage
//! backend is [`Storage::in_memory`](super::Storage::in_memory), not this.

use super::PayableSource;
use crate::error::PayablesResult;
use crate::models::{InvoiceRecord, OrderRecord};

/// An owned collection of records implementing [`PayableSource`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    orders: Vec<OrderRecord>,
    invoices: Vec<InvoiceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(orders: Vec<OrderRecord>, invoices: Vec<InvoiceRecord>) -> Self {
        Self { orders, invoices }
    }

    pub fn push_order(&mut self, order: OrderRecord) {
        self.orders.push(order);
    }

    pub fn push_invoice(&mut self, invoice: InvoiceRecord) {
        self.invoices.push(invoice);
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.invoices.is_empty()
    }
}

impl PayableSource for MemoryStore {
    fn list_orders(&self) -> PayablesResult<Vec<OrderRecord>> {
        Ok(self.orders.clone())
    }

    fn list_invoices(&self) -> PayablesResult<Vec<InvoiceRecord>> {
        Ok(self.invoices.clone())
    }
}

mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_lists_in_insertion_order() {
        let due = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.push_invoice(InvoiceRecord::new("FAC-2", Money::from_units(2), due));
        store.push_invoice(InvoiceRecord::new("FAC-1", Money::from_units(1), due));
        store.push_order(OrderRecord::new("CMD-1", Money::from_units(3), due));

        let numbers: Vec<_> = store
            .list_invoices()
            .unwrap()
            .into_iter()
            .map(|i| i.invoice_number)
            .collect();
        assert_eq!(numbers, vec!["FAC-2", "FAC-1"]);
        assert_eq!(store.list_orders().unwrap().len(), 1);
    }
}
