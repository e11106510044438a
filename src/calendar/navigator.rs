//! Month navigation for calendar views
//!
//! The navigator owns the displayed [`MonthCursor`] and only ever replaces it
//! whole, so year and month always move together.

use chrono::NaiveDate;
use tracing::trace;

use crate::error::PayablesResult;
use crate::models::MonthCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNavigator {
    cursor: MonthCursor,
}

impl MonthNavigator {
    /// Start on the month containing `today`
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            cursor: MonthCursor::containing(today),
        }
    }

    /// Start on an explicit month
    pub fn with_cursor(cursor: MonthCursor) -> Self {
        Self { cursor }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn next(&mut self) -> MonthCursor {
        self.cursor = self.cursor.next();
        trace!(cursor = %self.cursor, "next month");
        self.cursor
    }

    pub fn previous(&mut self) -> MonthCursor {
        self.cursor = self.cursor.previous();
        trace!(cursor = %self.cursor, "previous month");
        self.cursor
    }

    pub fn reset_to_today(&mut self, today: NaiveDate) -> MonthCursor {
        self.cursor = self.cursor.reset_to_today(today);
        trace!(cursor = %self.cursor, "reset to current month");
        self.cursor
    }

    /// Move by a signed number of months; the cursor is unchanged on error
    pub fn shift(&mut self, months: i64) -> PayablesResult<MonthCursor> {
        self.cursor = self.cursor.shift(months)?;
        trace!(cursor = %self.cursor, months, "shifted month");
        Ok(self.cursor)
    }
}
