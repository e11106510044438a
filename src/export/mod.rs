//! Export module for payables
//!
//! CSV export of the payment calendar for spreadsheets.

pub mod csv;

pub use self::csv::export_month_csv;
