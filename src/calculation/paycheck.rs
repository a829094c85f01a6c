//! Paycheck composition: the engine's top-level entry point.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::{CalculationConfig, FeatureToggles};
use crate::error::EngineResult;
use crate::models::{EmployeeSnapshot, PaycheckResult};

use super::{calculate_benefit_details, calculate_gross_pay_per_paycheck};

/// Calculates a paycheck using today's local date for dependent ages.
///
/// See [`calculate_paycheck_as_of`] for the rules.
pub fn calculate_paycheck(
    employee: &EmployeeSnapshot,
    config: &CalculationConfig,
    toggles: &FeatureToggles,
) -> EngineResult<PaycheckResult> {
    calculate_paycheck_as_of(employee, config, toggles, Local::now().date_naive())
}

/// Calculates gross pay, benefit deduction and net pay for one paycheck.
///
/// Gross pay is the annual salary divided by the paycheck count. Net pay is
/// gross pay minus the per-paycheck deduction and is not floored at zero, so
/// a low salary with many dependents yields a negative net pay.
///
/// The calculation is pure: the same inputs always produce the same result.
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidArgument`] if the salary or a configured
///   amount is negative, or a cost leaves the decimal range
/// - [`crate::error::EngineError::Configuration`] if the paycheck count is not positive
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_paycheck_as_of;
/// use benefits_engine::config::{CalculationConfig, FeatureToggles};
/// use benefits_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = EmployeeSnapshot {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::from_str("75420.99").unwrap(),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let paycheck = calculate_paycheck_as_of(
///     &employee,
///     &CalculationConfig::default(),
///     &FeatureToggles::all_enabled(),
///     NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
/// )?;
/// assert_eq!(paycheck.employee_name, "LeBron James");
/// assert_eq!(paycheck.gross_pay.round_dp(2), Decimal::from_str("2900.81").unwrap());
/// assert_eq!(paycheck.net_pay.round_dp(2), Decimal::from_str("2439.27").unwrap());
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub fn calculate_paycheck_as_of(
    employee: &EmployeeSnapshot,
    config: &CalculationConfig,
    toggles: &FeatureToggles,
    as_of: NaiveDate,
) -> EngineResult<PaycheckResult> {
    debug!(employee_id = employee.id, as_of = %as_of, "Calculating paycheck");

    let gross_pay = calculate_gross_pay_per_paycheck(employee.salary, config)?;
    let details = calculate_benefit_details(employee, config, toggles, as_of)?;
    let benefit_deductions = details.per_paycheck_deduction;

    let paycheck = PaycheckResult {
        employee_id: employee.id,
        employee_name: employee.display_name(),
        gross_pay,
        benefit_deductions,
        net_pay: gross_pay - benefit_deductions,
        details,
    };

    debug!(
        employee_id = employee.id,
        gross_pay = %paycheck.gross_pay,
        deductions = %paycheck.benefit_deductions,
        net_pay = %paycheck.net_pay,
        "Paycheck calculated"
    );

    Ok(paycheck)
}
