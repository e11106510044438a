//! Month aggregation over payable items
//!
//! Pure transformations chained by the caller: `filter_for_month` then
//! `group_by_day` for the grid contents, `filter_for_month` then
//! `compute_totals` for the header. `build_month_grid` depends on the month
//! alone.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::classifier::Classifier;
use crate::models::{Money, MonthCursor, PayableItem};

/// Money totals for a set of payable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthTotals {
    /// Everything not yet paid; partially paid items count in full
    pub total_due: Money,
    /// Everything classified overdue
    pub total_overdue: Money,
}

impl Add for MonthTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_due: self.total_due + other.total_due,
            total_overdue: self.total_overdue + other.total_overdue,
        }
    }
}

impl AddAssign for MonthTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Keep the items due within `month`, preserving input order
pub fn filter_for_month<'a, I>(items: I, month: MonthCursor) -> Vec<&'a PayableItem>
where
    I: IntoIterator<Item = &'a PayableItem>,
{
    items
        .into_iter()
        .filter(|item| month.contains(item.due_date()))
        .collect()
}

/// Partition items by the day-of-month of their due date
///
/// Days without items are absent from the map. Within a day, items keep
/// their input order.
pub fn group_by_day<'a, I>(items: I) -> BTreeMap<u32, Vec<&'a PayableItem>>
where
    I: IntoIterator<Item = &'a PayableItem>,
{
    let mut days: BTreeMap<u32, Vec<&'a PayableItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.due_date().day()).or_default().push(item);
    }
    days
}

/// Calendar cells for a Monday-first month view
///
/// Leading `None` cells pad up to the weekday of the 1st, followed by
/// `Some(1)..=Some(days_in_month)`. The final week is not padded.
pub fn build_month_grid(month: MonthCursor) -> Vec<Option<u32>> {
    let offset = month.leading_offset() as usize;
    let days = month.days_in_month();

    let mut grid = Vec::with_capacity(offset + days as usize);
    grid.extend(std::iter::repeat(None).take(offset));
    grid.extend((1..=days).map(Some));
    grid
}

/// Totals with the default due-soon window, evaluated on `today`
pub fn compute_totals<'a, I>(items: I, today: NaiveDate) -> MonthTotals
where
    I: IntoIterator<Item = &'a PayableItem>,
{
    compute_totals_with(items, &Classifier::new(today))
}

/// Totals for an already month-filtered set, using one classification pass
pub fn compute_totals_with<'a, I>(items: I, classifier: &Classifier) -> MonthTotals
where
    I: IntoIterator<Item = &'a PayableItem>,
{
    items
        .into_iter()
        .fold(MonthTotals::default(), |mut totals, item| {
            if !item.payment_status().is_paid() {
                totals.total_due += item.amount();
            }
            if classifier.classify(item).is_overdue {
                totals.total_overdue += item.amount();
            }
            totals
        })
}
