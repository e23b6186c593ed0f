//! Application state for the vacation pay API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::HolidayCalendar;

/// Shared application state.
///
/// Holds the read-only holiday calendar used for date-range calculations.
#[derive(Clone, Default)]
pub struct AppState {
    calendar: HolidayCalendar,
}

impl AppState {
    /// Creates a new application state with the given holiday calendar.
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
