//! Range validation for vacation pay inputs.
//!
//! This module holds the policy limits on salary and vacation length and the
//! predicates that check parsed values against them. The predicates are pure
//! and total; turning a failed check into an error is the job of
//! [`dispatch`](super::dispatch).

use chrono::NaiveDate;

use crate::models::DateRange;

/// Smallest accepted average salary, in currency subunits.
pub const MINIMUM_SALARY: i64 = 100;

/// Largest accepted average salary, in currency subunits.
pub const MAXIMUM_SALARY: i64 = 100_000_000_000_000;

/// Shortest accepted vacation, in calendar days.
pub const MINIMUM_DAYS: i64 = 1;

/// Longest accepted vacation, in calendar days.
pub const MAXIMUM_DAYS: i64 = 366;

/// Checks that an average salary lies within the permitted bounds.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::{valid_salary, MAXIMUM_SALARY, MINIMUM_SALARY};
///
/// assert!(valid_salary(MINIMUM_SALARY));
/// assert!(valid_salary(MAXIMUM_SALARY));
/// assert!(!valid_salary(MINIMUM_SALARY - 1));
/// assert!(!valid_salary(MAXIMUM_SALARY + 1));
/// ```
pub fn valid_salary(amount: i64) -> bool {
    (MINIMUM_SALARY..=MAXIMUM_SALARY).contains(&amount)
}

/// Checks that a day count lies within the permitted bounds.
pub fn valid_days(days: i64) -> bool {
    (MINIMUM_DAYS..=MAXIMUM_DAYS).contains(&days)
}

/// Checks that a vacation period is ordered and of permitted length.
///
/// Holidays inside the period still count towards its length.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::valid_date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
///
/// assert!(valid_date_range(start, end));
/// assert!(valid_date_range(start, start));
/// assert!(!valid_date_range(end, start));
/// ```
pub fn valid_date_range(start: NaiveDate, end: NaiveDate) -> bool {
    let range = DateRange::new(start, end);
    if !range.is_ordered() {
        return false;
    }
    valid_days(range.total_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_salary_within_bounds_is_valid() {
        assert!(valid_salary((MINIMUM_SALARY + MAXIMUM_SALARY) / 2));
    }

    #[test]
    fn test_salary_bounds_are_inclusive() {
        assert!(valid_salary(MINIMUM_SALARY));
        assert!(valid_salary(MAXIMUM_SALARY));
    }

    #[test]
    fn test_salary_below_minimum_is_invalid() {
        for salary in [MINIMUM_SALARY - 1, 0, -100, i64::MIN] {
            assert!(!valid_salary(salary), "salary {} should be invalid", salary);
        }
    }

    #[test]
    fn test_salary_above_maximum_is_invalid() {
        assert!(!valid_salary(MAXIMUM_SALARY + 1));
        assert!(!valid_salary(i64::MAX));
    }

    #[test]
    fn test_days_within_bounds_are_valid() {
        for days in [MINIMUM_DAYS, MAXIMUM_DAYS, 14, 28] {
            assert!(valid_days(days), "{} days should be valid", days);
        }
    }

    #[test]
    fn test_days_outside_bounds_are_invalid() {
        for days in [MINIMUM_DAYS - 1, 0, -5, MAXIMUM_DAYS + 1, 500] {
            assert!(!valid_days(days), "{} days should be invalid", days);
        }
    }

    #[test]
    fn test_period_in_middle_of_range_is_valid() {
        assert!(valid_date_range(date(2025, 7, 1), date(2025, 7, 15)));
    }

    #[test]
    fn test_end_before_start_is_invalid() {
        assert!(!valid_date_range(date(2025, 7, 1), date(2025, 6, 30)));
    }

    #[test]
    fn test_single_day_period_is_valid() {
        assert!(valid_date_range(date(2025, 7, 1), date(2025, 7, 1)));
    }

    #[test]
    fn test_period_of_exactly_maximum_days_is_valid() {
        // 2024 is a leap year: 366 days from January 1 to December 31
        assert!(valid_date_range(date(2024, 1, 1), date(2024, 12, 31)));
    }

    #[test]
    fn test_period_longer_than_maximum_days_is_invalid() {
        assert!(!valid_date_range(date(2024, 1, 1), date(2025, 1, 1)));
    }

    #[test]
    fn test_all_holiday_period_still_counts_towards_length() {
        // Eight holidays in a row is still a valid eight-day period
        assert!(valid_date_range(date(2025, 1, 1), date(2025, 1, 8)));
    }
}
