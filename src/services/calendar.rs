//! Calendar service
//!
//! Pulls records from a [`PayableSource`], adapts them into payable items, and
//! runs the calendar computations with one evaluation day per pass.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::calendar::{ClassifiedItem, Classifier, MonthView, UrgencyLevel, DUE_SOON_DAYS};
use crate::error::PayablesResult;
use crate::models::{adapt_invoice, adapt_order, MonthCursor, PayableItem};
use crate::storage::PayableSource;

/// Overdue and due-soon items across every month
#[derive(Debug, Clone)]
pub struct DueList {
    pub today: NaiveDate,
    pub window_days: i64,
    pub overdue: Vec<ClassifiedItem>,
    pub due_soon: Vec<ClassifiedItem>,
}

impl DueList {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.due_soon.is_empty()
    }
}

/// Service building calendar views from stored records
pub struct CalendarService<'a> {
    source: &'a dyn PayableSource,
    window_days: i64,
}

impl<'a> CalendarService<'a> {
    pub fn new(source: &'a dyn PayableSource) -> Self {
        Self {
            source,
            window_days: DUE_SOON_DAYS,
        }
    }

    /// Use a due-soon window other than the default
    pub fn with_window(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    /// Every payable order and invoice; orders first, cancelled records skipped
    #[instrument(skip(self))]
    pub fn collect_payables(&self) -> PayablesResult<Vec<PayableItem>> {
        let orders = self.source.list_orders()?;
        let invoices = self.source.list_invoices()?;
        let mut items = Vec::with_capacity(orders.len() + invoices.len());

        for order in &orders {
            if let Some(item) = adapt_order(order)? {
                items.push(item);
            }
        }
        for invoice in &invoices {
            if let Some(item) = adapt_invoice(invoice)? {
                items.push(item);
            }
        }

        debug!(
            orders = orders.len(),
            invoices = invoices.len(),
            payable = items.len(),
            "collected payables"
        );
        Ok(items)
    }

    fn classifier(&self, today: NaiveDate) -> Classifier {
        Classifier::new(today).with_window(self.window_days)
    }

    /// Aggregate one month as of `today`
    #[instrument(skip(self), fields(month = %month))]
    pub fn month_view(&self, month: MonthCursor, today: NaiveDate) -> PayablesResult<MonthView> {
        let items = self.collect_payables()?;
        Ok(MonthView::build(&items, month, &self.classifier(today)))
    }

    /// Overdue and due-soon items as of `today`, each list ordered by due date
    #[instrument(skip(self))]
    pub fn due_list(&self, today: NaiveDate) -> PayablesResult<DueList> {
        let classifier = self.classifier(today);
        let mut list = DueList {
            today,
            window_days: classifier.window_days(),
            overdue: Vec::new(),
            due_soon: Vec::new(),
        };

        for item in self.collect_payables()? {
            let urgency = classifier.classify(&item);
            let entry = ClassifiedItem { item, urgency };
            match urgency.level() {
                UrgencyLevel::Overdue => list.overdue.push(entry),
                UrgencyLevel::DueSoon => list.due_soon.push(entry),
                UrgencyLevel::Normal => {}
            }
        }

        list.overdue.sort_by_key(|c| c.item.due_date());
        list.due_soon.sort_by_key(|c| c.item.due_date());
        Ok(list)
    }
}
