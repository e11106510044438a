//! Service layer for payables
//!
//! Business logic on top of the storage layer: validation, lookup by number
//! or ID, and the calendar passes over stored records.

pub mod calendar;
pub mod invoice;
pub mod order;

pub use calendar::{CalendarService, DueList};
pub use invoice::InvoiceService;
pub use order::{OrderBilling, OrderService};
