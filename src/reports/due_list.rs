//! Due List Report
//!
//! Everything overdue or due within the window, across all months.

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::calendar::{days_until, ClassifiedItem};
use crate::error::PayablesResult;
use crate::models::Money;
use crate::services::{CalendarService, DueList};

#[derive(Tabled)]
struct DueRow {
    #[tabled(rename = "DUE")]
    due: String,
    #[tabled(rename = "ITEM")]
    title: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "DAYS")]
    days: String,
}

/// Due List Report
#[derive(Debug, Clone)]
pub struct DueListReport {
    pub list: DueList,
    pub currency_symbol: String,
}

impl DueListReport {
    pub fn generate(
        service: &CalendarService<'_>,
        today: NaiveDate,
        currency_symbol: &str,
    ) -> PayablesResult<Self> {
        Ok(Self {
            list: service.due_list(today)?,
            currency_symbol: currency_symbol.to_string(),
        })
    }

    pub fn total_overdue(&self) -> Money {
        self.list.overdue.iter().map(|c| c.item.amount()).sum()
    }

    pub fn total_due_soon(&self) -> Money {
        self.list.due_soon.iter().map(|c| c.item.amount()).sum()
    }

    fn table(&self, entries: &[ClassifiedItem]) -> String {
        let rows = entries.iter().map(|c| {
            let days = days_until(c.item.due_date(), self.list.today);
            DueRow {
                due: c.item.due_date().format("%Y-%m-%d").to_string(),
                title: c.item.title().to_string(),
                amount: c.item.amount().format_with_symbol(&self.currency_symbol),
                status: c.item.payment_status().to_string(),
                days: if days < 0 {
                    format!("{} late", -days)
                } else if days == 0 {
                    "today".to_string()
                } else {
                    format!("in {}", days)
                },
            }
        });
        Table::new(rows).with(Style::rounded()).to_string()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.list.is_empty() {
            return format!(
                "Nothing overdue or due in the next {} days.\n",
                self.list.window_days
            );
        }

        let mut output = String::new();

        if !self.list.overdue.is_empty() {
            output.push_str(&format!(
                "Overdue ({}): {}\n",
                self.list.overdue.len(),
                self.total_overdue().format_with_symbol(&self.currency_symbol)
            ));
            output.push_str(&self.table(&self.list.overdue));
            output.push_str("\n\n");
        }

        if !self.list.due_soon.is_empty() {
            output.push_str(&format!(
                "Due within {} days ({}): {}\n",
                self.list.window_days,
                self.list.due_soon.len(),
                self.total_due_soon().format_with_symbol(&self.currency_symbol)
            ));
            output.push_str(&self.table(&self.list.due_soon));
            output.push('\n');
        }

        output
    }
}
