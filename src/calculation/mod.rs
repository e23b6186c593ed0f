//! Calculation logic for the vacation pay service.
//!
//! This module contains the holiday lookup, the two vacation pay formulas
//! (by day count and by date range), the range predicates for salary and
//! vacation length, and the parsing and mode selection that turn raw request
//! fields into a validated request.

mod dispatch;
mod holidays;
mod vacation_pay;
mod validation;

pub use dispatch::{
    AVERAGE_SALARY_FIELD, DATE_FORMAT, DISPLAY_DATE_FORMAT, END_DATE_FIELD, NUMBER_OF_DAYS_FIELD,
    RequestedMode, START_DATE_FIELD, parse_date, parse_date_range, parse_days, parse_salary,
    resolve_request, select_mode,
};
pub use holidays::{HolidayCalendar, NON_WORKING_HOLIDAYS, count_holidays, is_holiday};
pub use vacation_pay::{
    AVERAGE_DAYS_IN_MONTH, calculate, daily_rate, pay_by_date_range, pay_by_days,
};
pub use validation::{
    MAXIMUM_DAYS, MAXIMUM_SALARY, MINIMUM_DAYS, MINIMUM_SALARY, valid_date_range, valid_days,
    valid_salary,
};
