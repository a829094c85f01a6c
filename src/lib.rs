//! Benefits Engine
//!
//! This crate calculates per-paycheck benefit deductions for employees from
//! their salary, their dependents and a set of configurable cost rules, and
//! serves the calculation over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
