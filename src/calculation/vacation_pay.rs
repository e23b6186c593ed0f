//! Vacation pay formulas.
//!
//! This module computes statutory vacation pay from an average monthly salary.
//! The daily rate is the salary divided by the average number of calendar days
//! in a month (29.3), and the payout is that rate times the number of paid
//! days, always rounded up to a whole subunit.
//!
//! Arithmetic is done in [`Decimal`] with the multiplication performed before
//! the division, so the ceiling is taken of the exact quotient. For large
//! salaries this can be one subunit above a double-precision evaluation of
//! `salary / 29.3 * days`, which rounds a value just above a whole number
//! down onto it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{CalculationMode, DateRange, VacationPayResult};

use super::holidays::HolidayCalendar;

/// Average number of calendar days in a month used to derive the daily rate.
pub const AVERAGE_DAYS_IN_MONTH: Decimal = Decimal::from_parts(293, 0, 0, false, 1);

/// Returns the average daily earnings for a monthly salary, unrounded.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::daily_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_rate(293_000), Decimal::from(10_000));
/// ```
pub fn daily_rate(salary: i64) -> Decimal {
    Decimal::from(salary) / AVERAGE_DAYS_IN_MONTH
}

/// Computes `ceil(salary / 29.3 * days)` in subunits.
fn pay_for_days(salary: i64, days: i64) -> i64 {
    let amount = (Decimal::from(salary) * Decimal::from(days) / AVERAGE_DAYS_IN_MONTH).ceil();
    // Only reachable for salaries far beyond MAXIMUM_SALARY
    amount.to_i64().unwrap_or(i64::MAX)
}

/// Calculates vacation pay for a number of calendar days.
///
/// Inputs are not range-checked here; callers validate them first.
///
/// # Arguments
///
/// * `salary` - Average monthly salary in subunits
/// * `days` - Number of vacation days
///
/// # Returns
///
/// `ceil(salary / 29.3 * days)`. A result that is already whole is returned
/// unchanged; any fractional remainder rounds up by one subunit.
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::pay_by_days;
///
/// assert_eq!(pay_by_days(293_000, 10), 100_000);
/// assert_eq!(pay_by_days(100_000, 14), 47_782);
/// assert_eq!(pay_by_days(150_000, 7), 35_837);
/// ```
pub fn pay_by_days(salary: i64, days: u32) -> i64 {
    pay_for_days(salary, i64::from(days))
}

/// Calculates vacation pay for an inclusive date range.
///
/// Statutory non-working holidays inside the range are not paid. A range made
/// up entirely of holidays pays exactly zero. The caller guarantees
/// `start <= end`.
///
/// # Examples
///
/// ```
/// use vacation_pay::calculation::pay_by_date_range;
/// use chrono::NaiveDate;
///
/// // 14 days with May 1 and May 9 inside: 12 paid days
/// let start = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 5, 11).unwrap();
/// assert_eq!(pay_by_date_range(293_000, start, end), 120_000);
///
/// // January 1 to 8 are all holidays
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
/// assert_eq!(pay_by_date_range(293_000, start, end), 0);
/// ```
pub fn pay_by_date_range(salary: i64, start: NaiveDate, end: NaiveDate) -> i64 {
    let range = DateRange::new(start, end);
    let (_, _, amount) = pay_for_range(salary, &range, &HolidayCalendar::statutory());
    amount
}

/// Returns `(holiday_days, paid_days, amount)` for a date range.
fn pay_for_range(salary: i64, range: &DateRange, calendar: &HolidayCalendar) -> (i64, i64, i64) {
    let holiday_days = calendar.count_holidays(range);
    let paid_days = range.total_days() - holiday_days;

    if paid_days == 0 {
        return (holiday_days, 0, 0);
    }

    (holiday_days, paid_days, pay_for_days(salary, paid_days))
}

/// Runs the formula selected by `mode` and reports how the payout was reached.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::{calculate, HolidayCalendar};
/// use vacation_pay::models::{CalculationMode, DateRange};
/// use chrono::NaiveDate;
///
/// let mode = CalculationMode::ByDateRange(DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 4, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 5, 11).unwrap(),
/// ));
/// let result = calculate(293_000, &mode, &HolidayCalendar::statutory());
///
/// assert_eq!(result.total_days, 14);
/// assert_eq!(result.holiday_days, 2);
/// assert_eq!(result.paid_days, 12);
/// assert_eq!(result.amount, 120_000);
/// ```
pub fn calculate(
    salary: i64,
    mode: &CalculationMode,
    calendar: &HolidayCalendar,
) -> VacationPayResult {
    let daily_rate = daily_rate(salary).round_dp(2);

    match mode {
        CalculationMode::ByDayCount(days) => VacationPayResult {
            mode: *mode,
            total_days: i64::from(*days),
            holiday_days: 0,
            paid_days: i64::from(*days),
            daily_rate,
            amount: pay_by_days(salary, *days),
        },
        CalculationMode::ByDateRange(range) => {
            let (holiday_days, paid_days, amount) = pay_for_range(salary, range, calendar);
            VacationPayResult {
                mode: *mode,
                total_days: range.total_days(),
                holiday_days,
                paid_days,
                daily_rate,
                amount,
            }
        }
    }
}
