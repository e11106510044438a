//! Display formatting for terminal output
//!
//! Tables for order and invoice listings, detail views, and the month grid.

pub mod calendar;
pub mod records;

pub use calendar::{format_month_grid, month_title};
pub use records::{
    format_invoice_details, format_invoice_list, format_order_billing, format_order_details,
    format_order_list, urgency_badge, ListContext,
};
