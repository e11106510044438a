//! Payment calendar CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::CommandContext;
use crate::calendar::MonthNavigator;
use crate::error::{PayablesError, PayablesResult};
use crate::export::export_month_csv;
use crate::models::MonthCursor;
use crate::reports::{DueListReport, PaymentCalendarReport};
use crate::services::CalendarService;

/// Options for the month calendar
#[derive(Args, Debug, Default)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Move forward this many months
    #[arg(long, default_value_t = 0)]
    pub next: u32,
    /// Move back this many months
    #[arg(long, default_value_t = 0)]
    pub prev: u32,
    /// Also write the month's items to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CalendarArgs {
    /// Resolve the displayed month relative to `ctx.today`
    pub fn resolve_month(&self, ctx: &CommandContext<'_>) -> PayablesResult<MonthCursor> {
        let mut navigator = match &self.month {
            Some(month) => MonthNavigator::with_cursor(MonthCursor::parse(month)?),
            None => MonthNavigator::starting_at(ctx.today),
        };
        navigator.shift(i64::from(self.next) - i64::from(self.prev))
    }
}

fn calendar_service<'a>(ctx: &CommandContext<'a>) -> CalendarService<'a> {
    CalendarService::new(ctx.storage).with_window(ctx.settings.due_soon_days)
}

/// Show the payment calendar for one month
pub fn handle_calendar_command(ctx: &CommandContext<'_>, args: CalendarArgs) -> PayablesResult<()> {
    let month = args.resolve_month(ctx)?;
    let service = calendar_service(ctx);
    let report =
        PaymentCalendarReport::generate(&service, month, ctx.today, &ctx.settings.currency_symbol)?;

    print!("{}", report.format_terminal());

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            PayablesError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        export_month_csv(&report.view, BufWriter::new(file))?;
        info!(path = %path.display(), items = report.view.item_count(), "exported month");
        println!("\nExported {} items to {}", report.view.item_count(), path.display());
    }

    Ok(())
}

/// Show everything overdue or due soon
pub fn handle_due_command(ctx: &CommandContext<'_>) -> PayablesResult<()> {
    let service = calendar_service(ctx);
    let report = DueListReport::generate(&service, ctx.today, &ctx.settings.currency_symbol)?;
    print!("{}", report.format_terminal());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::Storage;
    use chrono::NaiveDate;

    fn resolve(args: CalendarArgs) -> PayablesResult<MonthCursor> {
        let storage = Storage::in_memory();
        let settings = Settings::default();
        let ctx = CommandContext {
            storage: &storage,
            settings: &settings,
            today: NaiveDate::from_ymd_opt(2024, 12, 18).unwrap(),
        };
        args.resolve_month(&ctx)
    }

    #[test]
    fn test_defaults_to_current_month() {
        assert_eq!(
            resolve(CalendarArgs::default()).unwrap(),
            MonthCursor::new(2024, 12).unwrap()
        );
    }

    #[test]
    fn test_next_wraps_year() {
        let args = CalendarArgs {
            next: 2,
            ..CalendarArgs::default()
        };
        assert_eq!(resolve(args).unwrap(), MonthCursor::new(2025, 2).unwrap());
    }

    #[test]
    fn test_explicit_month_with_prev() {
        let args = CalendarArgs {
            month: Some("2024-01".into()),
            prev: 1,
            ..CalendarArgs::default()
        };
        assert_eq!(resolve(args).unwrap(), MonthCursor::new(2023, 12).unwrap());
    }

    #[test]
    fn test_invalid_month_rejected() {
        let args = CalendarArgs {
            month: Some("2024-13".into()),
            ..CalendarArgs::default()
        };
        assert!(matches!(
            resolve(args).unwrap_err(),
            PayablesError::InvalidMonth(13)
        ));
    }

    #[test]
    fn test_huge_next_is_rejected() {
        let args = CalendarArgs {
            next: u32::MAX,
            ..CalendarArgs::default()
        };
        assert!(matches!(
            resolve(args).unwrap_err(),
            PayablesError::YearOutOfRange(_)
        ));
    }
}
