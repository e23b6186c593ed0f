//! Core data models for the vacation pay service.
//!
//! This module contains the value objects passed between the validator and
//! the pay calculator.

mod calculation_result;
mod vacation_period;
mod vacation_request;

pub use calculation_result::VacationPayResult;
pub use vacation_period::{CalculationMode, DateRange};
pub use vacation_request::VacationRequest;
