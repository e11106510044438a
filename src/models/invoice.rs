//! Invoice model
//!
//! Invoices are issued against orders and carry their own due date. Like
//! orders, the payment status keeps the word it was written with.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{InvoiceId, OrderId};
use super::money::Money;
use super::order::{validate_amount, validate_number, validate_status, RecordValidationError};
use super::status::PaymentStatus;

/// A stored invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: InvoiceId,

    /// Human-facing number, e.g. "FAC-2024-001"
    pub invoice_number: String,

    pub issue_date: NaiveDate,

    /// Order this invoice bills, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,

    pub amount: Money,

    pub due_date: NaiveDate,

    /// Raw status word ("en attente", "payé", "PAID", "SENT", ...)
    pub payment_status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvoiceRecord {
    /// Create a new unpaid invoice issued today
    pub fn new(invoice_number: impl Into<String>, amount: Money, due_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new(),
            invoice_number: invoice_number.into(),
            issue_date: now.date_naive(),
            order_id: None,
            amount,
            due_date,
            payment_status: PaymentStatus::Unpaid.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status.as_str().to_string();
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_number(&self.invoice_number)?;
        validate_amount(self.amount)?;
        validate_status(&self.payment_status)
    }
}

impl fmt::Display for InvoiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invoice {}", self.invoice_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_invoice() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let invoice = InvoiceRecord::new("FAC-2024-001", Money::from_units(1200), due);
        assert!(invoice.validate().is_ok());
        assert!(invoice.order_id.is_none());
        assert_eq!(invoice.to_string(), "Invoice FAC-2024-001");
    }

    #[test]
    fn test_english_workflow_status_is_valid() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut invoice = InvoiceRecord::new("FAC-2024-001", Money::from_units(1200), due);
        invoice.payment_status = "OVERDUE".into();
        assert!(invoice.validate().is_ok());
        invoice.payment_status = "CANCELLED".into();
        assert!(invoice.validate().is_ok());
    }
}
