//! HTTP API module for the vacation pay service.
//!
//! This module provides the REST endpoint that calculates vacation pay from
//! query-string parameters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::VacationQuery;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
