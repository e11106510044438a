//! The payable item: one shape for everything with an amount and a due date
//!
//! Orders and invoices enter the payment calendar through the adapters at the
//! bottom of this module, which also normalize their status vocabulary.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::ids::{InvoiceId, OrderId};
use super::invoice::InvoiceRecord;
use super::money::Money;
use super::order::OrderRecord;
use super::status::{PaymentStatus, SourceStatus};
use crate::error::{PayablesError, PayablesResult};

/// Where a payable item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayableKind {
    Order,
    Invoice,
}

impl fmt::Display for PayableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "Order"),
            Self::Invoice => write!(f, "Invoice"),
        }
    }
}

/// Identifier of the source record, unique within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PayableId {
    Order(OrderId),
    Invoice(InvoiceId),
}

impl PayableId {
    pub fn kind(&self) -> PayableKind {
        match self {
            Self::Order(_) => PayableKind::Order,
            Self::Invoice(_) => PayableKind::Invoice,
        }
    }

    pub fn short(&self) -> String {
        match self {
            Self::Order(id) => id.short(),
            Self::Invoice(id) => id.short(),
        }
    }
}

impl fmt::Display for PayableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order(id) => write!(f, "{}", id),
            Self::Invoice(id) => write!(f, "{}", id),
        }
    }
}

/// A record with an amount due on a given day
///
/// Fields are private so the non-negative amount holds for every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayableItem {
    id: PayableId,
    title: String,
    amount: Money,
    due_date: NaiveDate,
    payment_status: PaymentStatus,
}

impl PayableItem {
    /// Create a payable item
    ///
    /// # Errors
    ///
    /// Returns [`PayablesError::NegativeAmount`] if `amount` is below zero and
    /// [`PayablesError::AmountTooLarge`] if it is above [`Money::MAX`].
    pub fn new(
        id: PayableId,
        title: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        payment_status: PaymentStatus,
    ) -> PayablesResult<Self> {
        if amount.is_negative() {
            return Err(PayablesError::NegativeAmount(amount.to_string()));
        }
        if amount.exceeds_max() {
            return Err(PayablesError::AmountTooLarge(amount.to_string()));
        }
        Ok(Self {
            id,
            title: title.into(),
            amount,
            due_date,
            payment_status,
        })
    }

    pub fn id(&self) -> PayableId {
        self.id
    }

    pub fn kind(&self) -> PayableKind {
        self.id.kind()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }
}

/// Adapt an order into the payable shape
///
/// Returns `Ok(None)` for cancelled orders, which owe nothing.
pub fn adapt_order(order: &OrderRecord) -> PayablesResult<Option<PayableItem>> {
    let status = match SourceStatus::normalize(&order.payment_status)? {
        SourceStatus::Payable(status) => status,
        SourceStatus::Cancelled => return Ok(None),
    };
    PayableItem::new(
        PayableId::Order(order.id),
        order.to_string(),
        order.total_amount,
        order.payment_due_date,
        status,
    )
    .map(Some)
}

/// Adapt an invoice into the payable shape
///
/// Returns `Ok(None)` for cancelled invoices.
pub fn adapt_invoice(invoice: &InvoiceRecord) -> PayablesResult<Option<PayableItem>> {
    let status = match SourceStatus::normalize(&invoice.payment_status)? {
        SourceStatus::Payable(status) => status,
        SourceStatus::Cancelled => return Ok(None),
    };
    PayableItem::new(
        PayableId::Invoice(invoice.id),
        invoice.to_string(),
        invoice.amount,
        invoice.due_date,
        status,
    )
    .map(Some)
}
