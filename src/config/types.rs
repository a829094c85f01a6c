//! Configuration types for benefit calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of paychecks per year when none is configured.
pub const DEFAULT_PAYCHECKS_PER_YEAR: i32 = 26;

/// The numeric cost rules used by every calculation.
///
/// Every field is optional in `calculation.yaml`; missing fields fall back to
/// the business defaults returned by [`CalculationConfig::default`].
///
/// # Example
///
/// ```
/// use benefits_engine::config::CalculationConfig;
/// use rust_decimal::Decimal;
///
/// let config = CalculationConfig::default();
/// assert_eq!(config.base_employee_monthly_cost, Decimal::new(1000, 0));
/// assert_eq!(config.paychecks_per_year, 26);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// Monthly benefit cost for the employee themself.
    pub base_employee_monthly_cost: Decimal,
    /// Monthly benefit cost for each dependent.
    pub dependent_monthly_cost: Decimal,
    /// Annual salary above which the high-salary surcharge applies.
    pub high_salary_threshold: Decimal,
    /// Yearly surcharge as a fraction of salary (0.02 for 2%).
    pub high_salary_percentage: Decimal,
    /// Age at which a dependent counts as a senior.
    pub senior_age_threshold: i32,
    /// Monthly surcharge for each senior dependent.
    pub senior_monthly_surcharge: Decimal,
    /// Number of paychecks the yearly cost is spread over.
    pub paychecks_per_year: i32,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            base_employee_monthly_cost: Decimal::new(1000, 0),
            dependent_monthly_cost: Decimal::new(600, 0),
            high_salary_threshold: Decimal::new(80000, 0),
            high_salary_percentage: Decimal::new(2, 2),
            senior_age_threshold: 50,
            senior_monthly_surcharge: Decimal::new(200, 0),
            paychecks_per_year: DEFAULT_PAYCHECKS_PER_YEAR,
        }
    }
}

impl CalculationConfig {
    /// Checks that the configuration can be used for calculation.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Configuration`] if `paychecks_per_year` is not positive
    /// - [`EngineError::InvalidArgument`] if any cost, threshold or percentage is negative
    pub fn validate(&self) -> EngineResult<()> {
        self.paychecks_per_year()?;

        let non_negative = [
            ("base_employee_monthly_cost", self.base_employee_monthly_cost),
            ("dependent_monthly_cost", self.dependent_monthly_cost),
            ("high_salary_threshold", self.high_salary_threshold),
            ("high_salary_percentage", self.high_salary_percentage),
            ("senior_monthly_surcharge", self.senior_monthly_surcharge),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::invalid_argument(
                    field,
                    format!("cannot be negative, got {}", value),
                ));
            }
        }

        Ok(())
    }

    /// Returns the paycheck count as a divisor, rejecting values that would
    /// divide by zero or flip signs.
    pub fn paychecks_per_year(&self) -> EngineResult<Decimal> {
        if self.paychecks_per_year <= 0 {
            return Err(EngineError::Configuration {
                message: format!(
                    "paychecks_per_year must be positive, got {}",
                    self.paychecks_per_year
                ),
            });
        }
        Ok(Decimal::from(self.paychecks_per_year))
    }
}

/// The three switches the engine reads, resolved to plain booleans before a
/// calculation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureToggles {
    /// Apply the surcharge for salaries above the threshold.
    pub high_salary_surcharge: bool,
    /// Apply the surcharge for dependents at or above the senior age.
    pub senior_dependent_surcharge: bool,
    /// Include per-dependent rows in the result.
    pub detailed_breakdown: bool,
}

impl FeatureToggles {
    /// Every toggle on.
    pub const fn all_enabled() -> Self {
        Self {
            high_salary_surcharge: true,
            senior_dependent_surcharge: true,
            detailed_breakdown: true,
        }
    }

    /// Every toggle off.
    pub const fn all_disabled() -> Self {
        Self {
            high_salary_surcharge: false,
            senior_dependent_surcharge: false,
            detailed_breakdown: false,
        }
    }
}
