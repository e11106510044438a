//! Order model
//!
//! An order placed for a client or with a supplier, carrying a payment due
//! date. The payment status is stored as the word the record was written
//! with; it is normalized when the order enters the payment calendar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::OrderId;
use super::money::Money;
use super::status::{PaymentStatus, SourceStatus};

/// A stored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,

    /// Human-facing number, e.g. "CMD-2024-001"
    pub order_number: String,

    pub order_date: NaiveDate,

    /// Client or supplier the order is with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Total amount including taxes
    pub total_amount: Money,

    pub payment_due_date: NaiveDate,

    /// Raw status word ("payé", "non payé", "partiellement payé", ...)
    pub payment_status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Create a new unpaid order dated today
    pub fn new(
        order_number: impl Into<String>,
        total_amount: Money,
        payment_due_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            order_number: order_number.into(),
            order_date: now.date_naive(),
            client_name: None,
            project_name: None,
            description: String::new(),
            total_amount,
            payment_due_date,
            payment_status: PaymentStatus::Unpaid.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the payment status with its canonical word
    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status.as_str().to_string();
        self.updated_at = Utc::now();
    }

    /// Validate the record before it is stored
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_number(&self.order_number)?;
        validate_amount(self.total_amount)?;
        validate_status(&self.payment_status)
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order {}", self.order_number)
    }
}

pub(crate) fn validate_number(number: &str) -> Result<(), RecordValidationError> {
    if number.trim().is_empty() {
        return Err(RecordValidationError::EmptyNumber);
    }
    if number.len() > 64 {
        return Err(RecordValidationError::NumberTooLong(number.len()));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: Money) -> Result<(), RecordValidationError> {
    if amount.is_negative() {
        return Err(RecordValidationError::NegativeAmount(amount));
    }
    if amount.exceeds_max() {
        return Err(RecordValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

pub(crate) fn validate_status(raw: &str) -> Result<(), RecordValidationError> {
    SourceStatus::normalize(raw)
        .map(|_| ())
        .map_err(|_| RecordValidationError::UnknownStatus(raw.to_string()))
}

/// Validation errors shared by orders and invoices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyNumber,
    NumberTooLong(usize),
    NegativeAmount(Money),
    AmountTooLarge(Money),
    UnknownStatus(String),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNumber => write!(f, "Number cannot be empty"),
            Self::NumberTooLong(len) => {
                write!(f, "Number too long ({} characters, max 64)", len)
            }
            Self::NegativeAmount(amount) => write!(f, "Amount cannot be negative: {}", amount),
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount too large: {} (max {})", amount, Money::MAX)
            }
            Self::UnknownStatus(s) => write!(f, "Unknown payment status: '{}'", s),
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    #[test]
    fn test_new_order_is_unpaid() {
        let order = OrderRecord::new("CMD-2024-002", Money::from_units(25000), due());
        assert_eq!(order.payment_status, "unpaid");
        assert!(order.validate().is_ok());
        assert_eq!(order.to_string(), "Order CMD-2024-002");
    }

    #[test]
    fn test_validation() {
        let mut order = OrderRecord::new("  ", Money::from_units(10), due());
        assert_eq!(order.validate(), Err(RecordValidationError::EmptyNumber));

        order.order_number = "CMD-1".into();
        order.total_amount = Money::from_cents(-1);
        assert_eq!(
            order.validate(),
            Err(RecordValidationError::NegativeAmount(Money::from_cents(-1)))
        );

        order.total_amount = Money::from_cents(Money::MAX.cents() + 1);
        assert!(matches!(
            order.validate(),
            Err(RecordValidationError::AmountTooLarge(_))
        ));

        order.total_amount = Money::MAX;
        assert!(order.validate().is_ok());

        order.total_amount = Money::zero();
        order.payment_status = "peut-être".into();
        assert!(matches!(
            order.validate(),
            Err(RecordValidationError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_set_payment_status() {
        let mut order = OrderRecord::new("CMD-1", Money::from_units(10), due());
        order.set_payment_status(PaymentStatus::PartiallyPaid);
        assert_eq!(order.payment_status, "partially paid");
    }

    #[test]
    fn test_legacy_json_with_french_status() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "order_number": "CMD-2023-003",
            "order_date": "2023-02-28",
            "client_name": "Groupe 123",
            "total_amount": 1850000,
            "payment_due_date": "2023-03-30",
            "payment_status": "partiellement payé",
            "created_at": "2023-02-28T09:00:00Z",
            "updated_at": "2023-02-28T09:00:00Z"
        }"#;
        let order: OrderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(order.total_amount, Money::from_units(18500));
        assert!(order.validate().is_ok());
        assert!(order.project_name.is_none());
    }

    #[test]
    fn test_malformed_due_date_is_rejected_on_load() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "order_number": "CMD-2023-003",
            "order_date": "2023-02-28",
            "total_amount": 100,
            "payment_due_date": "2023-02-30",
            "payment_status": "payé",
            "created_at": "2023-02-28T09:00:00Z",
            "updated_at": "2023-02-28T09:00:00Z"
        }"#;
        assert!(serde_json::from_str::<OrderRecord>(json).is_err());
    }
}
