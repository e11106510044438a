//! Month cursor: the (year, month) pair a calendar view renders
//!
//! Also home to the Gregorian helpers the month grid is built from. They are
//! plain arithmetic so every valid cursor has an answer without going through
//! fallible date construction.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::PayablesError;

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (28-31); `month` must be 1-12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Parse an ISO calendar date ("YYYY-MM-DD"), rejecting impossible dates
pub fn parse_date(s: &str) -> Result<NaiveDate, PayablesError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| PayablesError::InvalidDate(format!("'{}': {}", s.trim(), e)))
}

/// Render `date` with a strftime pattern
///
/// Returns `None` when the pattern is malformed or asks for fields a plain
/// date does not have (hours, time zones, ...).
pub fn format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Day of week with Sunday = 0 (Sakamoto's method)
fn weekday_from_sunday(year: i32, month: u32, day: u32) -> u32 {
    const T: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year as i64 - 1 } else { year as i64 };
    let dow = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + T[(month - 1) as usize]
        + day as i64;
    dow.rem_euclid(7) as u32
}

/// A displayed month; `month` is always within 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Create a cursor, rejecting months outside 1-12 and years outside the
    /// range a calendar date can represent
    pub fn new(year: i32, month: u32) -> Result<Self, PayablesError> {
        if !(1..=12).contains(&month) {
            return Err(PayablesError::InvalidMonth(month));
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(PayablesError::YearOutOfRange(i64::from(year)));
        }
        Ok(Self { year, month })
    }

    /// The month containing `today`
    pub fn containing(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The current real-world month, read from the local clock
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Advance one month, wrapping December into January of the next year
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Step back one month, wrapping January into December of the previous year
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Move by a signed number of months in one step
    ///
    /// Fails with [`PayablesError::YearOutOfRange`] when the target lands
    /// outside the supported years.
    pub fn shift(self, months: i64) -> Result<Self, PayablesError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1);
        let target = index
            .checked_add(months)
            .ok_or(PayablesError::YearOutOfRange(months.signum() * i64::MAX))?;

        let year = target.div_euclid(12);
        let month = target.rem_euclid(12) as u32 + 1;
        let year = i32::try_from(year).map_err(|_| PayablesError::YearOutOfRange(year))?;
        Self::new(year, month)
    }

    /// Discard this cursor and return the month containing `today`
    pub fn reset_to_today(self, today: NaiveDate) -> Self {
        Self::containing(today)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Blank cells before the 1st in a Monday-first week (Monday 0 .. Sunday 6)
    pub fn leading_offset(&self) -> u32 {
        match weekday_from_sunday(self.year, self.month, 1) {
            0 => 6,
            dow => dow - 1,
        }
    }

    /// Check whether a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PayablesError> {
        let s = s.trim();
        let invalid = || PayablesError::InvalidDate(format!("'{}' (expected YYYY-MM)", s));

        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthCursor {
    type Err = PayablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(matches!(MonthCursor::new(2024, 0), Err(PayablesError::InvalidMonth(0))));
        assert!(matches!(MonthCursor::new(2024, 13), Err(PayablesError::InvalidMonth(13))));
        assert!(MonthCursor::new(2024, 12).is_ok());
    }

    #[test]
    fn test_year_wrap() {
        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2025, 1).unwrap());
        assert_eq!(dec.next().previous(), dec);

        let jan = MonthCursor::new(2024, 1).unwrap();
        assert_eq!(jan.previous(), MonthCursor::new(2023, 12).unwrap());
    }

    #[test]
    fn test_rejects_out_of_range_year() {
        assert!(matches!(
            MonthCursor::new(i32::MAX, 12),
            Err(PayablesError::YearOutOfRange(_))
        ));
        assert!(matches!(
            MonthCursor::parse("-2147483648-01"),
            Err(PayablesError::YearOutOfRange(_))
        ));
        assert!(MonthCursor::new(NaiveDate::MAX.year(), 12).is_ok());
    }

    #[test]
    fn test_shift_matches_stepping() {
        let start = MonthCursor::new(2024, 11).unwrap();
        assert_eq!(start.shift(3).unwrap(), MonthCursor::new(2025, 2).unwrap());
        assert_eq!(start.shift(-23).unwrap(), MonthCursor::new(2022, 12).unwrap());
        assert_eq!(start.shift(0).unwrap(), start);

        let mut stepped = start;
        for _ in 0..40 {
            stepped = stepped.previous();
        }
        assert_eq!(start.shift(-40).unwrap(), stepped);
    }

    #[test]
    fn test_shift_out_of_range_is_an_error() {
        let start = MonthCursor::new(2024, 2).unwrap();
        assert!(matches!(
            start.shift(i64::from(u32::MAX)),
            Err(PayablesError::YearOutOfRange(_))
        ));
        assert!(matches!(start.shift(i64::MIN), Err(PayablesError::YearOutOfRange(_))));
        assert!(matches!(start.shift(i64::MAX), Err(PayablesError::YearOutOfRange(_))));
    }

    #[test]
    fn test_round_trip_every_month() {
        for year in [1999, 2000, 2023, 2024] {
            for month in 1..=12 {
                let cursor = MonthCursor::new(year, month).unwrap();
                assert_eq!(cursor.next().previous(), cursor);
                assert_eq!(cursor.previous().next(), cursor);
            }
        }
    }

    #[test]
    fn test_reset_to_today_discards_cursor() {
        let far = MonthCursor::new(1990, 3).unwrap();
        assert_eq!(
            far.reset_to_today(date(2024, 6, 18)),
            MonthCursor::new(2024, 6).unwrap()
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_days_in_month_agrees_with_chrono() {
        for year in 1895..=2105 {
            for month in 1..=12 {
                let cursor = MonthCursor::new(year, month).unwrap();
                let last = date(year, month, cursor.days_in_month());
                assert_eq!(last.succ_opt().unwrap().day(), 1, "{}", cursor);
            }
        }
    }

    #[test]
    fn test_leading_offset_agrees_with_chrono() {
        for year in 1895..=2105 {
            for month in 1..=12 {
                let cursor = MonthCursor::new(year, month).unwrap();
                let expected = date(year, month, 1).weekday().num_days_from_monday();
                assert_eq!(cursor.leading_offset(), expected, "{}", cursor);
            }
        }
    }

    #[test]
    fn test_known_first_weekdays() {
        // 2024-01-01 was a Monday, 2023-10-01 a Sunday
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Mon);
        assert_eq!(MonthCursor::new(2024, 1).unwrap().leading_offset(), 0);
        assert_eq!(MonthCursor::new(2023, 10).unwrap().leading_offset(), 6);
    }

    #[test]
    fn test_contains() {
        let jan = MonthCursor::new(2024, 1).unwrap();
        assert!(jan.contains(date(2024, 1, 31)));
        assert!(!jan.contains(date(2024, 2, 1)));
        assert!(!jan.contains(date(2023, 1, 15)));
    }

    #[test]
    fn test_format_date() {
        let day = date(2024, 2, 29);
        assert_eq!(format_date(day, "%d/%m/%Y").as_deref(), Some("29/02/2024"));
        assert_eq!(format_date(day, "%H:%M"), None);
        assert_eq!(format_date(day, "%Y-%Q"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
        assert!(matches!(parse_date("2023-02-29"), Err(PayablesError::InvalidDate(_))));
        assert!(matches!(parse_date("29/02/2024"), Err(PayablesError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_and_display() {
        let cursor: MonthCursor = "2025-03".parse().unwrap();
        assert_eq!(cursor, MonthCursor::new(2025, 3).unwrap());
        assert_eq!(cursor.to_string(), "2025-03");

        assert!(matches!(MonthCursor::parse("2025-13"), Err(PayablesError::InvalidMonth(13))));
        assert!(matches!(MonthCursor::parse("March"), Err(PayablesError::InvalidDate(_))));
    }
}
