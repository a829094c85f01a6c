//! Core data models for the Benefits Engine.
//!
//! This module contains the input snapshots and the paycheck result types.

mod employee;
mod paycheck;

pub use employee::{DependentSnapshot, EmployeeSnapshot, Relationship};
pub use paycheck::{DependentCostBreakdown, PaycheckDetails, PaycheckResult};
