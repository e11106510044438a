//! Payment urgency classification
//!
//! A payable item is *overdue* when its due date is strictly before the
//! evaluation day, and *due soon* when it falls between the evaluation day and
//! the end of the due-soon window (both inclusive). Paid items are never
//! flagged. Both flags are computed independently; callers that show a single
//! badge check [`Urgency::level`], where overdue wins.
//!
//! Evaluation happens at day granularity: `today` is a calendar date, so an
//! item due today is due soon and never overdue.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{PayableItem, PaymentStatus};

/// Default due-soon window in days
pub const DUE_SOON_DAYS: i64 = 7;

/// The two urgency flags of a payable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Urgency {
    pub is_overdue: bool,
    pub is_due_soon: bool,
}

/// Single urgency level, for callers that show one badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Overdue,
    DueSoon,
    Normal,
}

impl Urgency {
    pub fn level(&self) -> UrgencyLevel {
        if self.is_overdue {
            UrgencyLevel::Overdue
        } else if self.is_due_soon {
            UrgencyLevel::DueSoon
        } else {
            UrgencyLevel::Normal
        }
    }
}

/// Whole days from `today` until `due_date`; negative when already past
pub fn days_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Classify with the default seven-day window
pub fn classify(due_date: NaiveDate, status: PaymentStatus, today: NaiveDate) -> Urgency {
    classify_within(due_date, status, today, DUE_SOON_DAYS)
}

/// Classify with an explicit due-soon window (in days, inclusive)
pub fn classify_within(
    due_date: NaiveDate,
    status: PaymentStatus,
    today: NaiveDate,
    window_days: i64,
) -> Urgency {
    if status.is_paid() {
        return Urgency::default();
    }

    let diff_days = days_until(due_date, today);
    Urgency {
        is_overdue: due_date < today,
        is_due_soon: (0..=window_days).contains(&diff_days),
    }
}

/// A classification pass pinned to one evaluation day
///
/// Build one per rendered view so every item is judged against the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    today: NaiveDate,
    window_days: i64,
}

impl Classifier {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            window_days: DUE_SOON_DAYS,
        }
    }

    /// Use a different due-soon window; negative windows are treated as zero
    pub fn with_window(mut self, window_days: i64) -> Self {
        self.window_days = window_days.max(0);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    pub fn classify(&self, item: &PayableItem) -> Urgency {
        classify_within(
            item.due_date(),
            item.payment_status(),
            self.today,
            self.window_days,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 18).unwrap()
    }

    fn unpaid_in(days: i64) -> Urgency {
        classify(today() + Duration::days(days), PaymentStatus::Unpaid, today())
    }

    #[test]
    fn test_due_today() {
        let u = unpaid_in(0);
        assert!(u.is_due_soon);
        assert!(!u.is_overdue);
    }

    #[test]
    fn test_due_soon_boundary_is_inclusive() {
        assert!(unpaid_in(7).is_due_soon);
        assert!(!unpaid_in(8).is_due_soon);
        assert!(!unpaid_in(8).is_overdue);
    }

    #[test]
    fn test_due_yesterday() {
        let u = unpaid_in(-1);
        assert!(u.is_overdue);
        assert!(!u.is_due_soon);
    }

    #[test]
    fn test_paid_never_flagged() {
        let ten_years_ago = NaiveDate::from_ymd_opt(2014, 6, 18).unwrap();
        assert_eq!(
            classify(ten_years_ago, PaymentStatus::Paid, today()),
            Urgency::default()
        );
        for offset in -400..=400 {
            let due = today() + Duration::days(offset);
            assert_eq!(classify(due, PaymentStatus::Paid, today()), Urgency::default());
        }
    }

    #[test]
    fn test_partially_paid_is_still_flagged() {
        let due = today() + Duration::days(3);
        let u = classify(due, PaymentStatus::PartiallyPaid, today());
        assert!(u.is_due_soon);
        assert_eq!(u.level(), UrgencyLevel::DueSoon);
    }

    #[test]
    fn test_exactly_one_level_for_unpaid() {
        for offset in -30..=30 {
            let u = unpaid_in(offset);
            assert!(!(u.is_overdue && u.is_due_soon), "offset {}", offset);
            let expected = if offset < 0 {
                UrgencyLevel::Overdue
            } else if offset <= 7 {
                UrgencyLevel::DueSoon
            } else {
                UrgencyLevel::Normal
            };
            assert_eq!(u.level(), expected, "offset {}", offset);
        }
    }

    #[test]
    fn test_deterministic() {
        let due = today() + Duration::days(2);
        assert_eq!(
            classify(due, PaymentStatus::Unpaid, today()),
            classify(due, PaymentStatus::Unpaid, today())
        );
    }

    #[test]
    fn test_custom_window() {
        let c = Classifier::new(today()).with_window(3);
        let due = today() + Duration::days(4);
        assert!(!classify_within(due, PaymentStatus::Unpaid, c.today(), c.window_days()).is_due_soon);
        assert_eq!(Classifier::new(today()).with_window(-5).window_days(), 0);
    }
}
