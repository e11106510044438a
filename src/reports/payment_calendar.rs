//! Payment Calendar Report
//!
//! One month of payables: a header with the month totals, the grid, and the
//! items due in the month grouped by day.

use chrono::NaiveDate;

use crate::calendar::{ClassifiedItem, MonthView, UrgencyLevel};
use crate::display::{format_month_grid, month_title};
use crate::error::PayablesResult;
use crate::models::{Money, MonthCursor};
use crate::services::CalendarService;

/// Payment Calendar Report
#[derive(Debug, Clone)]
pub struct PaymentCalendarReport {
    pub view: MonthView,
    pub currency_symbol: String,
}

impl PaymentCalendarReport {
    /// Generate the report for `month` as of `today`
    pub fn generate(
        service: &CalendarService<'_>,
        month: MonthCursor,
        today: NaiveDate,
        currency_symbol: &str,
    ) -> PayablesResult<Self> {
        Ok(Self {
            view: service.month_view(month, today)?,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Payment Calendar - {}\n", month_title(&self.view)));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total due: {}    Overdue: {}\n\n",
            self.money(self.view.totals.total_due),
            self.money(self.view.totals.total_overdue)
        ));

        output.push_str(&format_month_grid(&self.view));
        output.push_str("\n  ! overdue   * due soon   + scheduled\n\n");

        if self.view.is_empty() {
            output.push_str("Nothing due this month.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:<28} {:>14}  {}\n",
            "Due", "Item", "Amount", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for entry in self.view.items() {
            output.push_str(&self.format_item(entry));
        }

        output
    }

    fn format_item(&self, entry: &ClassifiedItem) -> String {
        let badge = match entry.urgency.level() {
            UrgencyLevel::Overdue => "OVERDUE",
            UrgencyLevel::DueSoon => "due soon",
            UrgencyLevel::Normal => "",
        };
        let line = format!(
            "{:<12} {:<28} {:>14}  {:<15} {}",
            entry.item.due_date().format("%Y-%m-%d").to_string(),
            entry.item.title(),
            self.money(entry.item.amount()),
            entry.item.payment_status().to_string(),
            badge
        );
        format!("{}\n", line.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceRecord, OrderRecord};
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_report_contents() {
        let mut invoice = InvoiceRecord::new("FAC-2024-001", Money::from_units(1200), date(2024, 1, 1));
        invoice.payment_status = "en attente".into();
        let mut order = OrderRecord::new("CMD-2024-002", Money::from_units(600), date(2024, 1, 29));
        order.payment_status = "payé".into();
        let store = MemoryStore::with_records(vec![order], vec![invoice]);

        let service = CalendarService::new(&store);
        let report = PaymentCalendarReport::generate(
            &service,
            MonthCursor::new(2024, 1).unwrap(),
            date(2024, 2, 1),
            "€",
        )
        .unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Payment Calendar - January 2024"));
        assert!(output.contains("Total due: 1200.00 €    Overdue: 1200.00 €"));
        assert!(output.contains("Invoice FAC-2024-001"));
        assert!(output.contains("OVERDUE"));
        assert!(output.contains("Order CMD-2024-002"));
        assert!(output.contains("  1!"));
    }

    #[test]
    fn test_empty_month() {
        let store = MemoryStore::new();
        let service = CalendarService::new(&store);
        let report = PaymentCalendarReport::generate(
            &service,
            MonthCursor::new(2024, 3).unwrap(),
            date(2024, 3, 10),
            "€",
        )
        .unwrap();
        let output = report.format_terminal();

        assert!(output.contains("Total due: 0.00 €    Overdue: 0.00 €"));
        assert!(output.contains("Nothing due this month."));
    }
}
