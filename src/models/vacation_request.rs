//! Validated vacation pay request model.

use super::CalculationMode;

/// A fully parsed and range-checked vacation pay request.
///
/// Values of this type are only produced by
/// [`resolve_request`](crate::calculation::resolve_request), so the salary is
/// always within bounds and the mode always carries a valid duration.
///
/// # Example
///
/// ```
/// use vacation_pay::models::{CalculationMode, VacationRequest};
///
/// let request = VacationRequest {
///     average_salary: 293_000,
///     mode: CalculationMode::ByDayCount(7),
/// };
/// assert_eq!(request.average_salary, 293_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacationRequest {
    /// Average monthly salary in currency subunits.
    pub average_salary: i64,
    /// How the vacation duration was specified.
    pub mode: CalculationMode,
}
