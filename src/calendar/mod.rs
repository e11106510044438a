//! Payment calendar core
//!
//! Classification of payable items, month aggregation, and month navigation.
//! Nothing here performs I/O or reads the clock: the evaluation day is always
//! passed in, so one view is judged against one day.

pub mod aggregator;
pub mod classifier;
pub mod navigator;
pub mod view;

pub use aggregator::{
    build_month_grid, compute_totals, compute_totals_with, filter_for_month, group_by_day,
    MonthTotals,
};
pub use classifier::{
    classify, classify_within, days_until, Classifier, Urgency, UrgencyLevel, DUE_SOON_DAYS,
};
pub use navigator::MonthNavigator;
pub use view::{ClassifiedItem, MonthView};
