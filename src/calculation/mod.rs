//! Calculation logic for the Benefits Engine.
//!
//! This module contains the benefit cost rules: dependent age calculation,
//! per-dependent monthly cost with the senior surcharge, the high-salary
//! surcharge, aggregation of monthly costs into a per-paycheck deduction, and
//! composition of the final paycheck. Every function is pure; configuration
//! and toggles are passed in explicitly.

mod age;
mod benefit_details;
mod deduction;
mod dependent_cost;
mod high_salary;
mod paycheck;

pub use age::{age_today, calculate_age};
pub use benefit_details::calculate_benefit_details;
pub use deduction::{
    MONTHS_PER_YEAR, calculate_gross_pay_per_paycheck, calculate_per_paycheck_deduction,
};
pub use dependent_cost::calculate_dependent_cost;
pub use high_salary::calculate_high_salary_surcharge;
pub use paycheck::{calculate_paycheck, calculate_paycheck_as_of};
