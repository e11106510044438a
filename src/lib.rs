//! payables - payment calendar for orders and invoices
//!
//! This library tracks what is owed on orders and invoices and when. It
//! classifies each payable as overdue, due soon, or neither, and aggregates
//! them into a monthly payment calendar.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calendar`: Classification, month aggregation and navigation (pure)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Orders, invoices, money, status vocabularies, months
//! - `storage`: JSON file storage layer, optionally kept in memory
//! - `services`: Business logic layer
//! - `reports`, `display`, `export`: Terminal and CSV output
//! - `cli`: Command handlers for the `payables` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use payables::calendar::{Classifier, MonthView};
//! use payables::models::MonthCursor;
//!
//! let today = chrono::Local::now().date_naive();
//! let view = MonthView::build(&items, MonthCursor::containing(today), &Classifier::new(today));
//! println!("{} due, {} overdue", view.totals.total_due, view.totals.total_overdue);
//! ```

pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PayablesError, PayablesResult};
