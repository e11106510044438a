//! Reports module for payables
//!
//! The month payment calendar and the list of overdue and due-soon items.

pub mod due_list;
pub mod payment_calendar;

pub use due_list::DueListReport;
pub use payment_calendar::PaymentCalendarReport;
