//! High-salary surcharge calculation.

use rust_decimal::Decimal;

use crate::config::{CalculationConfig, FeatureToggles};
use crate::error::{EngineError, EngineResult};

use super::MONTHS_PER_YEAR;

/// Returns the monthly surcharge owed on `annual_salary`.
///
/// The surcharge is `annual_salary * high_salary_percentage / 12` when the
/// salary is strictly greater than `high_salary_threshold` and the toggle is
/// on. A salary equal to the threshold pays nothing.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if the configuration holds a negative
///   amount, or the salary is too large to apply the percentage to
/// - [`EngineError::Configuration`] if `paychecks_per_year` is not positive
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calculate_high_salary_surcharge;
/// use benefits_engine::config::{CalculationConfig, FeatureToggles};
/// use rust_decimal::Decimal;
///
/// let config = CalculationConfig::default();
/// let toggles = FeatureToggles::all_enabled();
///
/// let at_threshold = calculate_high_salary_surcharge(Decimal::new(80000, 0), &config, &toggles)?;
/// assert_eq!(at_threshold, Decimal::ZERO);
///
/// let above = calculate_high_salary_surcharge(Decimal::new(120000, 0), &config, &toggles)?;
/// assert_eq!(above, Decimal::new(200, 0));
/// # Ok::<(), benefits_engine::error::EngineError>(())
/// ```
pub fn calculate_high_salary_surcharge(
    annual_salary: Decimal,
    config: &CalculationConfig,
    toggles: &FeatureToggles,
) -> EngineResult<Decimal> {
    config.validate()?;

    if annual_salary <= config.high_salary_threshold || !toggles.high_salary_surcharge {
        return Ok(Decimal::ZERO);
    }

    annual_salary
        .checked_mul(config.high_salary_percentage)
        .and_then(|yearly| yearly.checked_div(Decimal::from(MONTHS_PER_YEAR)))
        .ok_or_else(|| {
            EngineError::invalid_argument(
                "annual_salary",
                format!(
                    "salary {} is too large to apply a {} surcharge",
                    annual_salary, config.high_salary_percentage
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn surcharge(salary: &str) -> Decimal {
        calculate_high_salary_surcharge(
            dec(salary),
            &CalculationConfig::default(),
            &FeatureToggles::all_enabled(),
        )
        .unwrap()
    }

    #[test]
    fn test_under_or_at_threshold_is_zero() {
        for salary in ["0", "50000", "79000", "79999", "79999.99", "80000", "80000.00"] {
            assert_eq!(surcharge(salary), Decimal::ZERO, "salary {}", salary);
        }
    }

    #[test]
    fn test_one_cent_over_threshold_triggers_surcharge() {
        let result = surcharge("80000.01");
        assert!(result > Decimal::ZERO);
        assert_eq!(result, dec("80000.01") * dec("0.02") / dec("12"));
        assert_eq!(result.round_dp(2), dec("133.33"));
    }

    #[test]
    fn test_over_threshold_is_two_percent_per_year() {
        assert_eq!(surcharge("80001").round_dp(2), dec("133.34"));
        assert_eq!(surcharge("100000").round_dp(2), dec("166.67"));
        assert_eq!(surcharge("120000"), dec("200"));
    }

    #[test]
    fn test_scenario_salaries() {
        assert_eq!(surcharge("92365.22").round_dp(2), dec("153.94"));
        assert_eq!(surcharge("143211.12").round_dp(2), dec("238.69"));
    }

    #[test]
    fn test_toggle_off_is_zero() {
        let toggles = FeatureToggles {
            high_salary_surcharge: false,
            ..FeatureToggles::all_enabled()
        };
        let result =
            calculate_high_salary_surcharge(dec("250000"), &CalculationConfig::default(), &toggles);
        assert_eq!(result, Ok(Decimal::ZERO));
    }

    #[test]
    fn test_configured_threshold_and_percentage() {
        let config = CalculationConfig {
            high_salary_threshold: dec("100000"),
            high_salary_percentage: dec("0.03"),
            ..CalculationConfig::default()
        };
        let toggles = FeatureToggles::all_enabled();

        assert_eq!(
            calculate_high_salary_surcharge(dec("100000"), &config, &toggles),
            Ok(Decimal::ZERO)
        );
        assert_eq!(
            calculate_high_salary_surcharge(dec("120000"), &config, &toggles),
            Ok(dec("300"))
        );
    }

    #[test]
    fn test_overflowing_salary_is_invalid_argument() {
        let config = CalculationConfig {
            high_salary_percentage: dec("2"),
            ..CalculationConfig::default()
        };
        assert!(config.validate().is_ok());

        let result =
            calculate_high_salary_surcharge(Decimal::MAX, &config, &FeatureToggles::all_enabled());
        match result {
            Err(EngineError::InvalidArgument { field, .. }) => assert_eq!(field, "annual_salary"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_percentage_is_rejected() {
        let config = CalculationConfig {
            high_salary_percentage: dec("-0.02"),
            ..CalculationConfig::default()
        };
        let result =
            calculate_high_salary_surcharge(dec("100000"), &config, &FeatureToggles::all_enabled());
        match result {
            Err(EngineError::InvalidArgument { field, .. }) => {
                assert_eq!(field, "high_salary_percentage")
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
