//! Payment status and the normalization of source vocabularies
//!
//! Order records say "payé" / "non payé" / "partiellement payé", invoice records
//! say "en attente" / "payé" / "partiellement payé", and older invoice data uses
//! an English workflow enumeration (PENDING, SENT, PAID, OVERDUE, ...). All of
//! them collapse into [`PaymentStatus`] here, so nothing downstream ever
//! branches on a raw string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PayablesError;

/// Payment state of an order or invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing has been paid yet
    #[default]
    Unpaid,
    /// Some, but not all, of the amount has been paid
    PartiallyPaid,
    /// Fully settled; never flagged overdue or due soon
    Paid,
}

/// What a raw status word means for the payment calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Payable(PaymentStatus),
    /// Cancelled records carry no payment obligation
    Cancelled,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Canonical word written back to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::PartiallyPaid => "partially paid",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpaid => write!(f, "Unpaid"),
            Self::PartiallyPaid => write!(f, "Partially paid"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// Lowercase, strip French accents, and fold `_`/`-` into spaces
fn fold(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'É' | 'È' | 'Ê' => 'e',
            '_' | '-' => ' ',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl SourceStatus {
    /// Normalize a raw status word from any source vocabulary
    ///
    /// # Errors
    ///
    /// Returns [`PayablesError::UnknownStatus`] for words outside every known
    /// vocabulary.
    pub fn normalize(raw: &str) -> Result<Self, PayablesError> {
        let status = match fold(raw).as_str() {
            "paye" | "payee" | "paid" | "settled" => PaymentStatus::Paid,
            "partiellement paye" | "partiellement payee" | "partially paid" | "partial"
            | "partiallypaid" => PaymentStatus::PartiallyPaid,
            "non paye" | "non payee" | "en attente" | "unpaid" | "pending" | "draft"
            | "sent" | "overdue" => PaymentStatus::Unpaid,
            "annule" | "annulee" | "cancelled" | "canceled" => return Ok(Self::Cancelled),
            _ => return Err(PayablesError::UnknownStatus(raw.trim().to_string())),
        };
        Ok(Self::Payable(status))
    }
}

impl FromStr for PaymentStatus {
    type Err = PayablesError;

    /// Parse a status for a record that must stay payable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SourceStatus::normalize(s)? {
            SourceStatus::Payable(status) => Ok(status),
            SourceStatus::Cancelled => Err(PayablesError::UnknownStatus(s.trim().to_string())),
        }
    }
}
