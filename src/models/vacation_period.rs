//! Vacation period and calculation mode models.
//!
//! This module contains the [`DateRange`] type describing an inclusive span of
//! vacation dates and the [`CalculationMode`] sum type that selects which pay
//! formula applies to a request.

use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive range of calendar dates.
///
/// Both `start` and `end` belong to the range. A range whose `end` precedes
/// its `start` is empty; callers validate ordering before calculating pay.
///
/// # Example
///
/// ```
/// use vacation_pay::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2025, 4, 28).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 5, 11).unwrap(),
/// };
///
/// assert_eq!(range.total_days(), 14);
/// assert_eq!(range.dates().count(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range from its first and last day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the number of calendar days in the range, counting both ends.
    ///
    /// For a reversed range the result is zero or negative.
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Returns `true` if `start` does not come after `end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Iterates over every date in the range in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

/// Selects how the duration of a vacation is specified.
///
/// The two variants are mutually exclusive: a request carries either a plain
/// day count or a concrete start/end date pair.
///
/// # Example
///
/// ```
/// use vacation_pay::models::{CalculationMode, DateRange};
/// use chrono::NaiveDate;
///
/// let by_days = CalculationMode::ByDayCount(14);
/// assert_eq!(by_days.to_string(), "day_count");
///
/// let by_range = CalculationMode::ByDateRange(DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
/// ));
/// assert_eq!(by_range.to_string(), "date_range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Pay for a fixed number of calendar days.
    ByDayCount(u32),
    /// Pay for the non-holiday days of an inclusive date range.
    ByDateRange(DateRange),
}

impl std::fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationMode::ByDayCount(_) => write!(f, "day_count"),
            CalculationMode::ByDateRange(_) => write!(f, "date_range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_single_day_range_has_one_day() {
        let range = DateRange::new(date(2025, 7, 1), date(2025, 7, 1));
        assert_eq!(range.total_days(), 1);
        assert_eq!(range.dates().collect::<Vec<_>>(), vec![date(2025, 7, 1)]);
    }

    #[test]
    fn test_range_crossing_year_boundary() {
        let range = DateRange::new(date(2024, 12, 30), date(2025, 1, 2));
        assert_eq!(range.total_days(), 4);
        assert_eq!(
            range.dates().collect::<Vec<_>>(),
            vec![
                date(2024, 12, 30),
                date(2024, 12, 31),
                date(2025, 1, 1),
                date(2025, 1, 2)
            ]
        );
    }

    #[test]
    fn test_leap_year_range_counts_february_29() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1));
        assert_eq!(range.total_days(), 3);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = DateRange::new(date(2025, 4, 13), date(2025, 4, 7));
        assert!(!range.is_ordered());
        assert!(range.total_days() <= 0);
        assert_eq!(range.dates().count(), 0);
    }

    #[test]
    fn test_calculation_mode_serialization() {
        let mode = CalculationMode::ByDayCount(7);
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, r#"{"by_day_count":7}"#);
    }
}
