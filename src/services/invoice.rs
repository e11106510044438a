//! Invoice service

use tracing::{info, instrument};

use crate::error::{PayablesError, PayablesResult};
use crate::models::{InvoiceRecord, OrderId, PaymentStatus};
use crate::storage::Storage;

/// Service for invoice management
pub struct InvoiceService<'a> {
    storage: &'a Storage,
}

impl<'a> InvoiceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new invoice
    ///
    /// A linked order must exist.
    #[instrument(skip(self, invoice), fields(number = %invoice.invoice_number))]
    pub fn create(&self, mut invoice: InvoiceRecord) -> PayablesResult<InvoiceRecord> {
        invoice.invoice_number = invoice.invoice_number.trim().to_string();
        invoice
            .validate()
            .map_err(|e| PayablesError::Validation(e.to_string()))?;

        if let Some(order_id) = invoice.order_id {
            if self.storage.orders.get(order_id)?.is_none() {
                return Err(PayablesError::order_not_found(order_id.to_string()));
            }
        }

        self.storage.invoices.create(invoice.clone())?;
        self.storage.invoices.save()?;

        info!(id = %invoice.id, "invoice created");
        Ok(invoice)
    }

    /// All invoices, ordered by due date
    pub fn list(&self) -> PayablesResult<Vec<InvoiceRecord>> {
        self.storage.invoices.get_all()
    }

    /// Invoices billed against an order
    pub fn list_for_order(&self, order_id: OrderId) -> PayablesResult<Vec<InvoiceRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|i| i.order_id == Some(order_id))
            .collect())
    }

    /// Find an invoice by number, full ID, or short ID
    pub fn find(&self, identifier: &str) -> PayablesResult<Option<InvoiceRecord>> {
        if let Some(invoice) = self.storage.invoices.get_by_number(identifier)? {
            return Ok(Some(invoice));
        }

        if let Ok(id) = identifier.parse() {
            if let Some(invoice) = self.storage.invoices.get(id)? {
                return Ok(Some(invoice));
            }
        }

        let mut matches = self
            .storage
            .invoices
            .get_all()?
            .into_iter()
            .filter(|i| i.id.matches(identifier));
        match (matches.next(), matches.next()) {
            (Some(invoice), None) => Ok(Some(invoice)),
            (Some(_), Some(_)) => Err(PayablesError::Validation(format!(
                "'{}' matches more than one invoice",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    pub fn get(&self, identifier: &str) -> PayablesResult<InvoiceRecord> {
        self.find(identifier)?
            .ok_or_else(|| PayablesError::invoice_not_found(identifier))
    }

    /// Update the payment status of an invoice
    #[instrument(skip(self))]
    pub fn set_status(
        &self,
        identifier: &str,
        status: PaymentStatus,
    ) -> PayablesResult<InvoiceRecord> {
        let mut invoice = self.get(identifier)?;
        invoice.set_payment_status(status);

        self.storage.invoices.update(invoice.clone())?;
        self.storage.invoices.save()?;

        info!(id = %invoice.id, status = status.as_str(), "invoice status updated");
        Ok(invoice)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, identifier: &str) -> PayablesResult<InvoiceRecord> {
        let invoice = self.get(identifier)?;
        self.storage.invoices.delete(invoice.id)?;
        self.storage.invoices.save()?;

        info!(id = %invoice.id, "invoice deleted");
        Ok(invoice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, OrderRecord};
    use chrono::NaiveDate;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_create_and_mark_paid() {
        let storage = Storage::in_memory();
        let service = InvoiceService::new(&storage);

        service
            .create(InvoiceRecord::new("FAC-2024-001", Money::from_units(1200), due()))
            .unwrap();
        let paid = service.set_status("fac-2024-001", PaymentStatus::Paid).unwrap();
        assert_eq!(paid.payment_status, "paid");
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_linked_order_must_exist() {
        let storage = Storage::in_memory();
        let service = InvoiceService::new(&storage);

        let mut invoice = InvoiceRecord::new("FAC-1", Money::from_units(1), due());
        invoice.order_id = Some(OrderId::new());
        assert!(service.create(invoice).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_for_order() {
        let storage = Storage::in_memory();
        let order = OrderRecord::new("CMD-1", Money::from_units(10), due());
        storage.orders.create(order.clone()).unwrap();
        let service = InvoiceService::new(&storage);

        let mut linked = InvoiceRecord::new("FAC-1", Money::from_units(5), due());
        linked.order_id = Some(order.id);
        service.create(linked).unwrap();
        service
            .create(InvoiceRecord::new("FAC-2", Money::from_units(5), due()))
            .unwrap();

        let for_order = service.list_for_order(order.id).unwrap();
        assert_eq!(for_order.len(), 1);
        assert_eq!(for_order[0].invoice_number, "FAC-1");
    }

    #[test]
    fn test_unknown_status_in_record_rejected() {
        let storage = Storage::in_memory();
        let service = InvoiceService::new(&storage);

        let mut invoice = InvoiceRecord::new("FAC-1", Money::from_units(1), due());
        invoice.payment_status = "refunded".into();
        assert!(service.create(invoice).unwrap_err().is_validation());
    }

    #[test]
    fn test_delete() {
        let storage = Storage::in_memory();
        let service = InvoiceService::new(&storage);
        service
            .create(InvoiceRecord::new("FAC-1", Money::from_units(1), due()))
            .unwrap();

        let removed = service.delete("FAC-1").unwrap();
        assert_eq!(removed.invoice_number, "FAC-1");
        assert!(service.find("FAC-1").unwrap().is_none());
    }
}
