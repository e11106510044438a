//! A fully aggregated month, ready to render

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregator::{build_month_grid, compute_totals_with, filter_for_month, group_by_day, MonthTotals};
use super::classifier::{Classifier, Urgency};
use crate::models::{MonthCursor, PayableItem};

/// A payable item together with its urgency for the current pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedItem {
    pub item: PayableItem,
    pub urgency: Urgency,
}

/// Everything a month calendar shows
#[derive(Debug, Clone, Serialize)]
pub struct MonthView {
    pub month: MonthCursor,
    /// Evaluation day shared by every classification in this view
    pub today: NaiveDate,
    pub grid: Vec<Option<u32>>,
    pub by_day: BTreeMap<u32, Vec<ClassifiedItem>>,
    pub totals: MonthTotals,
}

impl MonthView {
    /// Run one aggregation pass over `items` for `month`
    pub fn build(items: &[PayableItem], month: MonthCursor, classifier: &Classifier) -> Self {
        let in_month = filter_for_month(items, month);
        let totals = compute_totals_with(in_month.iter().copied(), classifier);

        let by_day = group_by_day(in_month)
            .into_iter()
            .map(|(day, items)| {
                let classified = items
                    .into_iter()
                    .map(|item| ClassifiedItem {
                        urgency: classifier.classify(item),
                        item: item.clone(),
                    })
                    .collect();
                (day, classified)
            })
            .collect();

        Self {
            month,
            today: classifier.today(),
            grid: build_month_grid(month),
            by_day,
            totals,
        }
    }

    /// Items due on a day; empty for days without items
    pub fn items_on(&self, day: u32) -> &[ClassifiedItem] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All items in the month, by day then input order
    pub fn items(&self) -> impl Iterator<Item = &ClassifiedItem> {
        self.by_day.values().flatten()
    }

    pub fn item_count(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
