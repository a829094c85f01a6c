//! Per-dependent monthly cost.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::{CalculationConfig, FeatureToggles};
use crate::error::{EngineError, EngineResult};
use crate::models::{DependentCostBreakdown, DependentSnapshot};

use super::calculate_age;

/// Calculates the monthly benefit cost for one dependent.
///
/// Every dependent costs `config.dependent_monthly_cost` regardless of
/// relationship. A dependent whose age on `as_of` is at least
/// `config.senior_age_threshold` adds `config.senior_monthly_surcharge`, but
/// only while the senior surcharge toggle is on. The age comparison is
/// inclusive: a dependent exactly at the threshold pays the surcharge.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] if the configuration holds a
/// negative amount or the two costs cannot be added, and
/// [`EngineError::Configuration`] if `paychecks_per_year` is not positive.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_dependent_cost;
/// use benefits_engine::config::{CalculationConfig, FeatureToggles};
/// use benefits_engine::models::{DependentSnapshot, Relationship};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dependent = DependentSnapshot {
///     id: 4,
///     first_name: "DP".to_string(),
///     last_name: "Jordan".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1974, 1, 2).unwrap(),
///     relationship: Relationship::DomesticPartner,
///     employee_id: 3,
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
///
/// let row = calculate_dependent_cost(
///     &dependent,
///     &CalculationConfig::default(),
///     &FeatureToggles::all_enabled(),
///     as_of,
/// )?;
/// assert_eq!(row.age, 51);
/// assert_eq!(row.senior_additional_cost, Decimal::new(200, 0));
/// assert_eq!(row.total_cost, Decimal::new(800, 0));
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub fn calculate_dependent_cost(
    dependent: &DependentSnapshot,
    config: &CalculationConfig,
    toggles: &FeatureToggles,
    as_of: NaiveDate,
) -> EngineResult<DependentCostBreakdown> {
    config.validate()?;

    let base_cost = config.dependent_monthly_cost;
    let age = calculate_age(dependent.date_of_birth, as_of);

    let senior_additional_cost =
        if age >= config.senior_age_threshold && toggles.senior_dependent_surcharge {
            config.senior_monthly_surcharge
        } else {
            Decimal::ZERO
        };

    let total_cost = base_cost
        .checked_add(senior_additional_cost)
        .ok_or_else(|| {
            EngineError::invalid_argument(
                "senior_monthly_surcharge",
                "dependent cost plus senior surcharge is out of range",
            )
        })?;

    Ok(DependentCostBreakdown {
        dependent_id: dependent.id,
        dependent_name: dependent.display_name(),
        relationship: dependent.relationship,
        age,
        base_cost,
        senior_additional_cost,
        total_cost,
    })
}
