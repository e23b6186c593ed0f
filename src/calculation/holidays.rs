//! Non-working public holiday lookup.
//!
//! This module provides the year-independent holiday table used to exclude
//! unpaid days from date-range calculations. A date is a holiday when its
//! month and day appear in the table, whatever the year.

use chrono::{Datelike, NaiveDate};

use crate::models::DateRange;

/// The statutory non-working holidays as `(month, day)` pairs.
///
/// Sorted ascending so membership can be answered by binary search.
pub const NON_WORKING_HOLIDAYS: [(u32, u32); 14] = [
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (1, 6),
    (1, 7),
    (1, 8),
    (2, 23),
    (3, 8),
    (5, 1),
    (5, 9),
    (6, 12),
    (11, 4),
];

/// A read-only, year-independent set of holidays keyed by month and day.
///
/// The calendar borrows a `'static` table, so it is `Copy` and can be shared
/// between any number of concurrent requests without synchronization.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::statutory();
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCalendar {
    days: &'static [(u32, u32)],
}

impl HolidayCalendar {
    /// Returns the calendar of statutory non-working holidays.
    pub const fn statutory() -> Self {
        Self {
            days: &NON_WORKING_HOLIDAYS,
        }
    }

    /// Returns `true` if the date's month and day are in the table.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.days
            .binary_search(&(date.month(), date.day()))
            .is_ok()
    }

    /// Counts the holidays falling inside an inclusive date range.
    ///
    /// A reversed range contains no dates and yields zero.
    pub fn count_holidays(&self, range: &DateRange) -> i64 {
        range.dates().filter(|date| self.is_holiday(*date)).count() as i64
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::statutory()
    }
}

/// Checks whether a date is a statutory non-working holiday.
///
/// The comparison ignores the year, so the answer for 1 May is the same in
/// every year.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
/// assert!(is_holiday(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()));
/// ```
pub fn is_holiday(date: NaiveDate) -> bool {
    HolidayCalendar::statutory().is_holiday(date)
}

/// Counts the statutory non-working holidays between `start` and `end` inclusive.
pub fn count_holidays(start: NaiveDate, end: NaiveDate) -> i64 {
    HolidayCalendar::statutory().count_holidays(&DateRange::new(start, end))
}
