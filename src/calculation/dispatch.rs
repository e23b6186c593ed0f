//! Parsing and mode selection for raw vacation pay requests.
//!
//! Raw requests arrive as optional text fields. This module decides which
//! calculation mode they select, parses each field, and applies the range
//! checks from [`validation`](super::validation), producing either a
//! [`VacationRequest`] or the first error encountered.
//!
//! The order of checks is fixed: salary presence, salary parse, salary range,
//! mode selection, then parsing and range checks for the selected mode. Mode
//! selection only looks at which fields are present, so a conflicting request
//! is rejected before any day count or date is parsed.

use chrono::{Datelike, NaiveDate};

use crate::error::{ModeConflict, VacationError, VacationResult};
use crate::models::{CalculationMode, DateRange, VacationRequest};

use super::validation::{
    MAXIMUM_DAYS, MAXIMUM_SALARY, MINIMUM_DAYS, MINIMUM_SALARY, valid_date_range, valid_days,
    valid_salary,
};

/// Query parameter carrying the average monthly salary.
pub const AVERAGE_SALARY_FIELD: &str = "averageSalary";

/// Query parameter carrying the number of vacation days.
pub const NUMBER_OF_DAYS_FIELD: &str = "numberOfDays";

/// Query parameter carrying the first day of vacation.
pub const START_DATE_FIELD: &str = "startDate";

/// Query parameter carrying the last day of vacation.
pub const END_DATE_FIELD: &str = "endDate";

/// `chrono` pattern for request dates (`dd-MM-yy`).
pub const DATE_FORMAT: &str = "%d-%m-%y";

/// The request date format as shown to callers.
pub const DISPLAY_DATE_FORMAT: &str = "dd-mm-yy";

/// The raw, unparsed fields of the mode a request selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedMode<'a> {
    /// Only `numberOfDays` was supplied.
    DayCount(&'a str),
    /// Both `startDate` and `endDate` were supplied.
    DateRange {
        /// Raw `startDate`.
        start: &'a str,
        /// Raw `endDate`.
        end: &'a str,
    },
}

/// Treats blank text the same as an absent field.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.trim().is_empty())
}

/// Decides which calculation mode the present fields select.
///
/// Exactly one of these must hold:
/// - `days` present, neither date present
/// - both dates present, `days` absent
///
/// Supplying `days` together with either date is
/// [`ModeConflict::Ambiguous`]. Anything else, including a lone date, is
/// [`ModeConflict::Missing`]. Field contents are not inspected beyond
/// blankness.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::{select_mode, RequestedMode};
///
/// assert_eq!(select_mode(Some("14"), None, None).unwrap(), RequestedMode::DayCount("14"));
/// assert!(select_mode(Some("14"), Some("01-07-25"), None).is_err());
/// assert!(select_mode(None, Some("01-07-25"), None).is_err());
/// ```
pub fn select_mode<'a>(
    days: Option<&'a str>,
    start: Option<&'a str>,
    end: Option<&'a str>,
) -> VacationResult<RequestedMode<'a>> {
    match (present(days), present(start), present(end)) {
        (Some(days), None, None) => Ok(RequestedMode::DayCount(days)),
        (None, Some(start), Some(end)) => Ok(RequestedMode::DateRange { start, end }),
        (Some(_), _, _) => Err(VacationError::AmbiguousOrMissingMode {
            conflict: ModeConflict::Ambiguous,
        }),
        (None, _, _) => Err(VacationError::AmbiguousOrMissingMode {
            conflict: ModeConflict::Missing,
        }),
    }
}

/// Parses and range-checks the average salary.
pub fn parse_salary(raw: Option<&str>) -> VacationResult<i64> {
    let raw = present(raw).ok_or_else(|| VacationError::MissingRequiredField {
        field: AVERAGE_SALARY_FIELD.to_string(),
    })?;

    let salary: i64 = raw.parse().map_err(|_| VacationError::NotANumber {
        field: AVERAGE_SALARY_FIELD.to_string(),
    })?;

    if !valid_salary(salary) {
        return Err(VacationError::SalaryOutOfRange {
            min: MINIMUM_SALARY,
            max: MAXIMUM_SALARY,
            value: salary,
        });
    }

    Ok(salary)
}

/// Parses and range-checks the number of vacation days.
pub fn parse_days(raw: &str) -> VacationResult<u32> {
    let days: i32 = raw.parse().map_err(|_| VacationError::NotANumber {
        field: NUMBER_OF_DAYS_FIELD.to_string(),
    })?;

    if !valid_days(i64::from(days)) {
        return Err(VacationError::DaysOutOfRange {
            min: MINIMUM_DAYS,
            max: MAXIMUM_DAYS,
            value: i64::from(days),
        });
    }

    u32::try_from(days).map_err(|_| VacationError::DaysOutOfRange {
        min: MINIMUM_DAYS,
        max: MAXIMUM_DAYS,
        value: i64::from(days),
    })
}

/// Returns `true` if `raw` has the exact `dd-mm-yy` shape.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 8
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `dd-mm-yy` date. Two-digit years map to 2000-2099.
///
/// `field` names the parameter in the error.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("28-04-25", "startDate").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()
/// );
/// assert_eq!(
///     parse_date("31-12-99", "endDate").unwrap(),
///     NaiveDate::from_ymd_opt(2099, 12, 31).unwrap()
/// );
/// assert!(parse_date("2025-04-28", "startDate").is_err());
/// ```
pub fn parse_date(raw: &str, field: &str) -> VacationResult<NaiveDate> {
    let not_a_date = || VacationError::NotADate {
        field: field.to_string(),
        format: DISPLAY_DATE_FORMAT.to_string(),
    };

    if !has_date_shape(raw) {
        return Err(not_a_date());
    }

    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| not_a_date())?;

    // chrono maps two-digit years 69-99 to the 1900s
    if date.year() < 2000 {
        return date.with_year(date.year() + 100).ok_or_else(not_a_date);
    }

    Ok(date)
}

/// Parses both ends of a vacation period and checks its order and length.
pub fn parse_date_range(start: &str, end: &str) -> VacationResult<DateRange> {
    let start = parse_date(start, START_DATE_FIELD)?;
    let end = parse_date(end, END_DATE_FIELD)?;

    if !valid_date_range(start, end) {
        return Err(VacationError::InvalidDateOrder {
            start,
            end,
            min: MINIMUM_DAYS,
            max: MAXIMUM_DAYS,
        });
    }

    Ok(DateRange::new(start, end))
}

/// Turns the raw request fields into a validated [`VacationRequest`].
///
/// Fields that are absent or blank are treated alike. The first failing check
/// determines the error.
///
/// # Example
///
/// ```
/// use vacation_pay::calculation::resolve_request;
/// use vacation_pay::error::VacationError;
/// use vacation_pay::models::CalculationMode;
///
/// let request = resolve_request(Some("293000"), Some("7"), None, None).unwrap();
/// assert_eq!(request.average_salary, 293_000);
/// assert_eq!(request.mode, CalculationMode::ByDayCount(7));
///
/// let error = resolve_request(None, Some("7"), None, None).unwrap_err();
/// assert!(matches!(error, VacationError::MissingRequiredField { .. }));
/// ```
pub fn resolve_request(
    average_salary: Option<&str>,
    number_of_days: Option<&str>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> VacationResult<VacationRequest> {
    let average_salary = parse_salary(average_salary)?;

    let mode = match select_mode(number_of_days, start_date, end_date)? {
        RequestedMode::DayCount(days) => CalculationMode::ByDayCount(parse_days(days)?),
        RequestedMode::DateRange { start, end } => {
            CalculationMode::ByDateRange(parse_date_range(start, end)?)
        }
    };

    Ok(VacationRequest {
        average_salary,
        mode,
    })
}
