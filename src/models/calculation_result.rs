//! Calculation result model for the vacation pay service.
//!
//! This module contains the [`VacationPayResult`] type that captures the payout
//! of a calculation together with the day counts that produced it.

use rust_decimal::Decimal;
use serde::Serialize;

use super::CalculationMode;

/// The outcome of a vacation pay calculation.
///
/// `amount` is the figure returned to callers. The remaining fields record how
/// it was reached and are used for logging.
///
/// # Example
///
/// ```
/// use vacation_pay::models::{CalculationMode, VacationPayResult};
/// use rust_decimal::Decimal;
///
/// let result = VacationPayResult {
///     mode: CalculationMode::ByDayCount(10),
///     total_days: 10,
///     holiday_days: 0,
///     paid_days: 10,
///     daily_rate: Decimal::new(1_000_000, 2),
///     amount: 100_000,
/// };
/// assert!(!result.is_unpaid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VacationPayResult {
    /// The mode the calculation ran in.
    pub mode: CalculationMode,
    /// Calendar days covered by the request.
    pub total_days: i64,
    /// Non-working holidays inside the requested period.
    pub holiday_days: i64,
    /// Days that attract pay (`total_days - holiday_days`).
    pub paid_days: i64,
    /// Average daily earnings, rounded to two decimal places.
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    /// The payout in currency subunits, rounded up.
    pub amount: i64,
}

impl VacationPayResult {
    /// Returns `true` if the period consisted solely of holidays.
    pub fn is_unpaid(&self) -> bool {
        self.paid_days == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_all_holiday_result_is_unpaid() {
        let result = VacationPayResult {
            mode: CalculationMode::ByDateRange(DateRange::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(),
            )),
            total_days: 8,
            holiday_days: 8,
            paid_days: 0,
            daily_rate: Decimal::new(1_000_000, 2),
            amount: 0,
        };
        assert!(result.is_unpaid());
    }

    #[test]
    fn test_daily_rate_serializes_as_string() {
        let result = VacationPayResult {
            mode: CalculationMode::ByDayCount(1),
            total_days: 1,
            holiday_days: 0,
            paid_days: 1,
            daily_rate: Decimal::new(341297, 2),
            amount: 3413,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["daily_rate"], "3412.97");
        assert_eq!(json["amount"], 3413);
    }
}
