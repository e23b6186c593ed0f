//! Request types for the vacation pay API.
//!
//! This module defines the query-string structure for the `/calculate`
//! endpoint. Every field is kept as raw text so that parse failures can be
//! reported with their own error instead of a generic extractor rejection.

use serde::Deserialize;

use crate::calculation::resolve_request;
use crate::error::VacationResult;
use crate::models::VacationRequest;

/// Query parameters of the `/calculate` endpoint.
///
/// `averageSalary` is required. Either `numberOfDays` or both `startDate` and
/// `endDate` (`dd-mm-yy`) select the calculation mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationQuery {
    /// Average monthly salary in currency subunits.
    #[serde(default)]
    pub average_salary: Option<String>,
    /// Number of vacation days.
    #[serde(default)]
    pub number_of_days: Option<String>,
    /// First day of vacation.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of vacation.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl VacationQuery {
    /// Parses and validates the query into a [`VacationRequest`].
    pub fn resolve(&self) -> VacationResult<VacationRequest> {
        resolve_request(
            self.average_salary.as_deref(),
            self.number_of_days.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VacationError;
    use crate::models::CalculationMode;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "averageSalary": "293000",
            "numberOfDays": "7"
        }"#;

        let query: VacationQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.average_salary.as_deref(), Some("293000"));
        assert_eq!(query.number_of_days.as_deref(), Some("7"));
        assert!(query.start_date.is_none());
        assert!(query.end_date.is_none());
    }

    #[test]
    fn test_resolve_day_count_query() {
        let query = VacationQuery {
            average_salary: Some("293000".to_string()),
            number_of_days: Some("7".to_string()),
            ..Default::default()
        };

        let request = query.resolve().unwrap();
        assert_eq!(request.average_salary, 293_000);
        assert_eq!(request.mode, CalculationMode::ByDayCount(7));
    }

    #[test]
    fn test_resolve_empty_query_reports_missing_salary() {
        let error = VacationQuery::default().resolve().unwrap_err();
        assert!(matches!(error, VacationError::MissingRequiredField { .. }));
    }
}
