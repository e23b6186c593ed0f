//! Error types for the vacation pay service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition under which a vacation pay request is rejected, plus
//! the configuration errors that can occur at startup.

use chrono::NaiveDate;
use thiserror::Error;

/// Why the calculation mode of a request could not be determined.
///
/// A request must carry either a day count or a start/end date pair,
/// never both and never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeConflict {
    /// A day count was supplied together with one or both dates.
    Ambiguous,
    /// Neither a day count nor a complete date pair was supplied.
    Missing,
}

impl std::fmt::Display for ModeConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeConflict::Ambiguous => write!(
                f,
                "Specify EITHER numberOfDays OR both startDate and endDate, not all of them together."
            ),
            ModeConflict::Missing => write!(
                f,
                "Either numberOfDays or both startDate and endDate must be specified."
            ),
        }
    }
}

/// The main error type for the vacation pay service.
///
/// # Example
///
/// ```
/// use vacation_pay::error::VacationError;
///
/// let error = VacationError::MissingRequiredField {
///     field: "averageSalary".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required parameter averageSalary is missing.");
/// ```
#[derive(Debug, Error)]
pub enum VacationError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required request parameter was absent or blank.
    #[error("Required parameter {field} is missing.")]
    MissingRequiredField {
        /// The name of the missing parameter.
        field: String,
    },

    /// A numeric request parameter could not be parsed as an integer.
    #[error("Parameter {field} must be an integer.")]
    NotANumber {
        /// The name of the offending parameter.
        field: String,
    },

    /// A date request parameter did not match the expected format.
    #[error("Invalid date format for {field}. Expected format {format}.")]
    NotADate {
        /// The name of the offending parameter.
        field: String,
        /// The expected format, as shown to the caller.
        format: String,
    },

    /// The average salary was parsed but lies outside the permitted bounds.
    #[error(
        "Average salary (averageSalary) must be between {min} and {max} subunits. You entered {value} subunits."
    )]
    SalaryOutOfRange {
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
        /// The value that was supplied.
        value: i64,
    },

    /// The day count was parsed but lies outside the permitted bounds.
    #[error(
        "Number of vacation days (numberOfDays) must be between {min} and {max}. You entered {value} days."
    )]
    DaysOutOfRange {
        /// Lower bound (inclusive).
        min: i64,
        /// Upper bound (inclusive).
        max: i64,
        /// The value that was supplied.
        value: i64,
    },

    /// The request supplied neither or both of the two calculation modes.
    #[error("{conflict}")]
    AmbiguousOrMissingMode {
        /// Which way the mode selection failed.
        conflict: ModeConflict,
    },

    /// The end date precedes the start date, or the span is out of range.
    #[error(
        "Invalid vacation period {start} to {end}: the end date must not precede the start date and the period must last between {min} and {max} days."
    )]
    InvalidDateOrder {
        /// The requested first day of vacation.
        start: NaiveDate,
        /// The requested last day of vacation.
        end: NaiveDate,
        /// Minimum permitted span in days (inclusive).
        min: i64,
        /// Maximum permitted span in days (inclusive).
        max: i64,
    },
}

/// A type alias for Results that return VacationError.
pub type VacationResult<T> = Result<T, VacationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = VacationError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = VacationError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_not_a_number_names_field() {
        let error = VacationError::NotANumber {
            field: "numberOfDays".to_string(),
        };
        assert_eq!(error.to_string(), "Parameter numberOfDays must be an integer.");
    }

    #[test]
    fn test_not_a_date_names_field_and_format() {
        let error = VacationError::NotADate {
            field: "startDate".to_string(),
            format: "dd-mm-yy".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date format for startDate. Expected format dd-mm-yy."
        );
    }

    #[test]
    fn test_salary_out_of_range_includes_bounds_and_value() {
        let error = VacationError::SalaryOutOfRange {
            min: 100,
            max: 100_000_000_000_000,
            value: 99,
        };
        let message = error.to_string();
        assert!(message.contains("between 100 and 100000000000000"));
        assert!(message.contains("You entered 99 subunits"));
    }

    #[test]
    fn test_days_out_of_range_includes_bounds_and_value() {
        let error = VacationError::DaysOutOfRange {
            min: 1,
            max: 366,
            value: 367,
        };
        let message = error.to_string();
        assert!(message.contains("between 1 and 366"));
        assert!(message.contains("You entered 367 days"));
    }

    #[test]
    fn test_mode_conflicts_have_distinct_messages() {
        let ambiguous = VacationError::AmbiguousOrMissingMode {
            conflict: ModeConflict::Ambiguous,
        };
        let missing = VacationError::AmbiguousOrMissingMode {
            conflict: ModeConflict::Missing,
        };
        assert!(ambiguous.to_string().contains("not all of them together"));
        assert!(missing.to_string().starts_with("Either numberOfDays"));
        assert_ne!(ambiguous.to_string(), missing.to_string());
    }

    #[test]
    fn test_invalid_date_order_displays_period() {
        let error = VacationError::InvalidDateOrder {
            start: NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            min: 1,
            max: 366,
        };
        let message = error.to_string();
        assert!(message.starts_with("Invalid vacation period 2025-04-13 to 2025-04-07"));
        assert!(message.contains("between 1 and 366 days"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<VacationError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_field() -> VacationResult<()> {
            Err(VacationError::MissingRequiredField {
                field: "averageSalary".to_string(),
            })
        }

        fn propagates_error() -> VacationResult<()> {
            returns_missing_field()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
