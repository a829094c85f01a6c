//! Aggregation of monthly benefit costs into paycheck details.
//!
//! This module sums the employee base cost, each dependent's cost and the
//! high-salary surcharge, then converts the monthly total into a
//! per-paycheck deduction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{CalculationConfig, FeatureToggles};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSnapshot, PaycheckDetails};

use super::{
    calculate_dependent_cost, calculate_high_salary_surcharge, calculate_per_paycheck_deduction,
};

/// Builds the full benefit cost breakdown for an employee.
///
/// Dependents are processed in input order. Each dependent's base cost and
/// senior surcharge are summed separately, and the dependent's row is kept
/// only when `toggles.detailed_breakdown` is on. The totals are identical
/// either way.
///
/// # Arguments
///
/// * `employee` - The employee with dependents already loaded
/// * `config` - The cost rules
/// * `toggles` - Resolved feature switches for this request
/// * `as_of` - The date used to compute dependent ages
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if the configuration holds a negative
///   amount or a sum leaves the decimal range
/// - [`EngineError::Configuration`] if the paycheck count is not positive
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_benefit_details;
/// use benefits_engine::config::{CalculationConfig, FeatureToggles};
/// use benefits_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSnapshot {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::new(7542099, 2),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
///
/// let details = calculate_benefit_details(
///     &employee,
///     &CalculationConfig::default(),
///     &FeatureToggles::all_enabled(),
///     as_of,
/// )?;
/// assert_eq!(details.total_monthly_cost, Decimal::new(1000, 0));
/// assert_eq!(details.per_paycheck_deduction.round_dp(2), Decimal::new(46154, 2));
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub fn calculate_benefit_details(
    employee: &EmployeeSnapshot,
    config: &CalculationConfig,
    toggles: &FeatureToggles,
    as_of: NaiveDate,
) -> EngineResult<PaycheckDetails> {
    config.validate()?;

    let mut total_monthly_cost = config.base_employee_monthly_cost;
    let mut dependents_cost = Decimal::ZERO;
    let mut senior_dependents_cost = Decimal::ZERO;
    let mut dependent_breakdowns = Vec::new();

    for dependent in &employee.dependents {
        let row = calculate_dependent_cost(dependent, config, toggles, as_of)?;
        dependents_cost = add_cost(dependents_cost, row.base_cost, "dependents_cost")?;
        senior_dependents_cost = add_cost(
            senior_dependents_cost,
            row.senior_additional_cost,
            "senior_dependents_cost",
        )?;
        total_monthly_cost = add_cost(total_monthly_cost, row.total_cost, "total_monthly_cost")?;

        if toggles.detailed_breakdown {
            dependent_breakdowns.push(row);
        }
    }

    let high_salary_additional_cost =
        calculate_high_salary_surcharge(employee.salary, config, toggles)?;
    total_monthly_cost = add_cost(
        total_monthly_cost,
        high_salary_additional_cost,
        "total_monthly_cost",
    )?;

    let per_paycheck_deduction = calculate_per_paycheck_deduction(total_monthly_cost, config)?;

    debug!(
        employee_id = employee.id,
        dependents = employee.dependents.len(),
        total_monthly_cost = %total_monthly_cost,
        per_paycheck_deduction = %per_paycheck_deduction,
        "Calculated benefit details"
    );

    Ok(PaycheckDetails {
        employee_base_cost: config.base_employee_monthly_cost,
        dependents_cost,
        high_salary_additional_cost,
        senior_dependents_cost,
        total_monthly_cost,
        per_paycheck_deduction,
        paychecks_per_year: config.paychecks_per_year,
        dependent_breakdowns,
    })
}

fn add_cost(total: Decimal, amount: Decimal, field: &str) -> EngineResult<Decimal> {
    total.checked_add(amount).ok_or_else(|| {
        EngineError::invalid_argument(field, format!("adding {} exceeds the decimal range", amount))
    })
}
