//! Order service
//!
//! Validation and lookup on top of the order repository. Every mutation is
//! saved immediately.

use tracing::{info, instrument};

use crate::error::{PayablesError, PayablesResult};
use crate::models::{Money, OrderRecord, PaymentStatus};
use crate::storage::Storage;

/// How much of an order has been billed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBilling {
    /// Number of invoices linked to the order
    pub invoice_count: usize,
    /// Sum of every linked invoice, whatever its payment status
    pub invoiced: Money,
    /// Order total minus `invoiced`; negative when over-invoiced
    pub remaining: Money,
}

impl OrderBilling {
    /// Whether part of the order total is still to be invoiced
    pub fn has_remaining(&self) -> bool {
        self.remaining > Money::zero()
    }
}

/// Service for order management
pub struct OrderService<'a> {
    storage: &'a Storage,
}

impl<'a> OrderService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and store a new order
    #[instrument(skip(self, order), fields(number = %order.order_number))]
    pub fn create(&self, mut order: OrderRecord) -> PayablesResult<OrderRecord> {
        order.order_number = order.order_number.trim().to_string();
        order
            .validate()
            .map_err(|e| PayablesError::Validation(e.to_string()))?;

        self.storage.orders.create(order.clone())?;
        self.storage.orders.save()?;

        info!(id = %order.id, "order created");
        Ok(order)
    }

    /// All orders, ordered by due date
    pub fn list(&self) -> PayablesResult<Vec<OrderRecord>> {
        self.storage.orders.get_all()
    }

    /// Find an order by number, full ID, or short ID
    pub fn find(&self, identifier: &str) -> PayablesResult<Option<OrderRecord>> {
        if let Some(order) = self.storage.orders.get_by_number(identifier)? {
            return Ok(Some(order));
        }

        if let Ok(id) = identifier.parse() {
            if let Some(order) = self.storage.orders.get(id)? {
                return Ok(Some(order));
            }
        }

        let mut matches = self
            .storage
            .orders
            .get_all()?
            .into_iter()
            .filter(|o| o.id.matches(identifier));
        match (matches.next(), matches.next()) {
            (Some(order), None) => Ok(Some(order)),
            (Some(_), Some(_)) => Err(PayablesError::Validation(format!(
                "'{}' matches more than one order",
                identifier
            ))),
            _ => Ok(None),
        }
    }

    /// Like [`find`](Self::find), but a missing order is an error
    pub fn get(&self, identifier: &str) -> PayablesResult<OrderRecord> {
        self.find(identifier)?
            .ok_or_else(|| PayablesError::order_not_found(identifier))
    }

    /// Invoiced total and amount left to invoice for `order`
    pub fn billing(&self, order: &OrderRecord) -> PayablesResult<OrderBilling> {
        let invoices: Vec<_> = self
            .storage
            .invoices
            .get_all()?
            .into_iter()
            .filter(|i| i.order_id == Some(order.id))
            .collect();
        let invoiced: Money = invoices.iter().map(|i| i.amount).sum();

        Ok(OrderBilling {
            invoice_count: invoices.len(),
            invoiced,
            remaining: order.total_amount - invoiced,
        })
    }

    /// Update the payment status of an order
    #[instrument(skip(self))]
    pub fn set_status(
        &self,
        identifier: &str,
        status: PaymentStatus,
    ) -> PayablesResult<OrderRecord> {
        let mut order = self.get(identifier)?;
        order.set_payment_status(status);

        self.storage.orders.update(order.clone())?;
        self.storage.orders.save()?;

        info!(id = %order.id, status = status.as_str(), "order status updated");
        Ok(order)
    }

    /// Delete an order, returning what was removed
    ///
    /// Orders that still have invoices billed against them are kept.
    #[instrument(skip(self))]
    pub fn delete(&self, identifier: &str) -> PayablesResult<OrderRecord> {
        let order = self.get(identifier)?;

        let invoices = self
            .storage
            .invoices
            .get_all()?
            .into_iter()
            .filter(|i| i.order_id == Some(order.id))
            .count();
        if invoices > 0 {
            return Err(PayablesError::Validation(format!(
                "Order {} has {} invoice(s); delete them first",
                order.order_number, invoices
            )));
        }

        self.storage.orders.delete(order.id)?;
        self.storage.orders.save()?;

        info!(id = %order.id, "order deleted");
        Ok(order)
    }
}
