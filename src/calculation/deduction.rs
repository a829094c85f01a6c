//! Conversion between annual, monthly and per-paycheck amounts.

use rust_decimal::Decimal;

use crate::config::CalculationConfig;
use crate::error::{EngineError, EngineResult};

/// Months used to annualize monthly costs.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Returns the gross pay for a single paycheck: `annual_salary / paychecks_per_year`.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `annual_salary` or a configured amount is negative
/// - [`EngineError::Configuration`] if `paychecks_per_year` is not positive
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_gross_pay_per_paycheck;
/// use benefits_engine::config::CalculationConfig;
/// use rust_decimal::Decimal;
///
/// let gross = calculate_gross_pay_per_paycheck(Decimal::new(52000, 0), &CalculationConfig::default())?;
/// assert_eq!(gross, Decimal::new(2000, 0));
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub fn calculate_gross_pay_per_paycheck(
    annual_salary: Decimal,
    config: &CalculationConfig,
) -> EngineResult<Decimal> {
    if annual_salary < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "annual_salary",
            "annual salary cannot be negative",
        ));
    }

    config.validate()?;
    Ok(annual_salary / config.paychecks_per_year()?)
}

/// Spreads a monthly cost evenly across the year's paychecks.
///
/// The monthly cost is annualized first and then divided by the paycheck
/// count: `(total_monthly_cost * 12) / paychecks_per_year`. Keeping this order
/// makes results reproducible at full decimal precision.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `total_monthly_cost` is negative or
///   too large to annualize, or a configured amount is negative
/// - [`EngineError::Configuration`] if `paychecks_per_year` is not positive
pub fn calculate_per_paycheck_deduction(
    total_monthly_cost: Decimal,
    config: &CalculationConfig,
) -> EngineResult<Decimal> {
    if total_monthly_cost < Decimal::ZERO {
        return Err(EngineError::invalid_argument(
            "total_monthly_cost",
            "monthly cost cannot be negative",
        ));
    }

    config.validate()?;
    let paychecks = config.paychecks_per_year()?;
    let total_yearly_cost = total_monthly_cost
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .ok_or_else(|| {
            EngineError::invalid_argument(
                "total_monthly_cost",
                format!("monthly cost {} is too large to annualize", total_monthly_cost),
            )
        })?;

    Ok(total_yearly_cost / paychecks)
}
