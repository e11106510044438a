//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod calendar;
pub mod invoice;
pub mod order;

pub use calendar::{handle_calendar_command, handle_due_command, CalendarArgs};
pub use invoice::{handle_invoice_command, InvoiceCommands};
pub use order::{handle_order_command, OrderCommands};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::ListContext;
use crate::error::{PayablesError, PayablesResult};
use crate::models::{Money, PaymentStatus};
use crate::storage::Storage;

/// What every command handler runs against
///
/// `today` is read once per invocation so every listing and classification
/// in one command agrees on the date.
pub struct CommandContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    pub today: NaiveDate,
}

impl<'a> CommandContext<'a> {
    pub fn list_context(&self) -> ListContext<'a> {
        ListContext {
            today: self.today,
            window_days: self.settings.due_soon_days,
            currency_symbol: &self.settings.currency_symbol,
            date_format: &self.settings.date_format,
        }
    }
}

pub(crate) fn parse_amount(input: &str) -> PayablesResult<Money> {
    Money::parse(input).map_err(|e| {
        PayablesError::Validation(format!(
            "{}. Use a format like '1200', '1200.50' or '1200,50'",
            e
        ))
    })
}

pub(crate) fn parse_status(input: &str) -> PayablesResult<PaymentStatus> {
    input.parse()
}
