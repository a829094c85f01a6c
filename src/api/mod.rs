//! HTTP API module for the Benefits Engine.
//!
//! This module provides the REST endpoints for calculating paychecks and
//! inspecting the feature flags the service was started with.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DependentRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, FeatureFlagResponse};
pub use state::AppState;
