//! Core data models for payables
//!
//! Orders and invoices as they are stored, the payable shape the payment
//! calendar works on, and the small value types both share.

pub mod ids;
pub mod invoice;
pub mod money;
pub mod month;
pub mod order;
pub mod payable;
pub mod status;

pub use ids::{InvoiceId, OrderId};
pub use invoice::InvoiceRecord;
pub use money::Money;
pub use month::{days_in_month, format_date, is_leap_year, parse_date, MonthCursor};
pub use order::{OrderRecord, RecordValidationError};
pub use payable::{adapt_invoice, adapt_order, PayableId, PayableItem, PayableKind};
pub use status::{PaymentStatus, SourceStatus};
