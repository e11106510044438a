//! Custom error types for payables
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for payables operations
#[derive(Error, Debug)]
pub enum PayablesError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Month outside 1-12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// A date string that could not be parsed, or a date that does not exist
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Payable amounts cannot be negative
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(String),

    /// Payable amounts are capped at `Money::MAX`
    #[error("Amount too large: {0}")]
    AmountTooLarge(String),

    /// Year outside the supported calendar range
    #[error("Year out of range: {0}")]
    YearOutOfRange(i64),

    /// A payment status word outside the known vocabularies
    #[error("Unknown payment status: '{0}'")]
    UnknownStatus(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PayablesError {
    /// Create a "not found" error for orders
    pub fn order_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Order",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for invoices
    pub fn invoice_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Invoice",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error, including the core's precondition checks
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidMonth(_)
                | Self::InvalidDate(_)
                | Self::NegativeAmount(_)
                | Self::AmountTooLarge(_)
                | Self::YearOutOfRange(_)
                | Self::UnknownStatus(_)
        )
    }
}

impl From<std::io::Error> for PayablesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PayablesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PayablesError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for payables operations
pub type PayablesResult<T> = Result<T, PayablesError>;
