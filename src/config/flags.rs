//! Named feature flags and their resolved state.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::FeatureToggles;

/// Every flag the service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FeatureFlag {
    /// Gates the paycheck calculation endpoint.
    EnablePaycheckCalculation,
    /// Gates dependent maintenance operations in the surrounding service.
    EnableDependentOperations,
    /// Gates the high-salary surcharge.
    EnableHighSalaryCalculation,
    /// Gates the senior dependent surcharge.
    EnableSeniorDependentSurcharge,
    /// Gates per-dependent rows in the paycheck details.
    EnableDetailedPaycheckBreakdown,
    /// Gates the interactive API documentation page.
    EnableSwaggerUI,
    /// Gates bulk operations in the surrounding service.
    EnableBulkOperations,
    /// Gates verbose request logging.
    EnableAdvancedLogging,
    /// Gates response caching.
    EnableCaching,
    /// Gates request rate limiting.
    EnableRateLimiting,
}

impl FeatureFlag {
    /// All flags, in declaration order.
    pub const ALL: [FeatureFlag; 10] = [
        FeatureFlag::EnablePaycheckCalculation,
        FeatureFlag::EnableDependentOperations,
        FeatureFlag::EnableHighSalaryCalculation,
        FeatureFlag::EnableSeniorDependentSurcharge,
        FeatureFlag::EnableDetailedPaycheckBreakdown,
        FeatureFlag::EnableSwaggerUI,
        FeatureFlag::EnableBulkOperations,
        FeatureFlag::EnableAdvancedLogging,
        FeatureFlag::EnableCaching,
        FeatureFlag::EnableRateLimiting,
    ];

    /// The flag's configuration key.
    pub fn name(self) -> &'static str {
        match self {
            FeatureFlag::EnablePaycheckCalculation => "EnablePaycheckCalculation",
            FeatureFlag::EnableDependentOperations => "EnableDependentOperations",
            FeatureFlag::EnableHighSalaryCalculation => "EnableHighSalaryCalculation",
            FeatureFlag::EnableSeniorDependentSurcharge => "EnableSeniorDependentSurcharge",
            FeatureFlag::EnableDetailedPaycheckBreakdown => "EnableDetailedPaycheckBreakdown",
            FeatureFlag::EnableSwaggerUI => "EnableSwaggerUI",
            FeatureFlag::EnableBulkOperations => "EnableBulkOperations",
            FeatureFlag::EnableAdvancedLogging => "EnableAdvancedLogging",
            FeatureFlag::EnableCaching => "EnableCaching",
            FeatureFlag::EnableRateLimiting => "EnableRateLimiting",
        }
    }

    /// A human-readable explanation of what the flag controls.
    pub fn description(self) -> &'static str {
        match self {
            FeatureFlag::EnablePaycheckCalculation => {
                "Controls whether paycheck calculation functionality is enabled"
            }
            FeatureFlag::EnableDependentOperations => {
                "Controls whether dependent CRUD operations are enabled"
            }
            FeatureFlag::EnableHighSalaryCalculation => {
                "Controls whether the high salary surcharge is applied"
            }
            FeatureFlag::EnableSeniorDependentSurcharge => {
                "Controls whether the senior dependent surcharge is applied"
            }
            FeatureFlag::EnableDetailedPaycheckBreakdown => {
                "Controls whether detailed paycheck breakdown is included in responses"
            }
            FeatureFlag::EnableSwaggerUI => "Controls whether Swagger UI is enabled",
            FeatureFlag::EnableBulkOperations => "Controls whether bulk operations are enabled",
            FeatureFlag::EnableAdvancedLogging => "Controls whether advanced logging is enabled",
            FeatureFlag::EnableCaching => "Controls whether response caching is enabled",
            FeatureFlag::EnableRateLimiting => "Controls whether rate limiting is enabled",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureFlag {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == s)
            .ok_or_else(|| EngineError::UnknownFeatureFlag {
                name: s.to_string(),
            })
    }
}

/// The state of every flag, as read from `feature_flags.yaml`.
///
/// Flags absent from the file are disabled.
///
/// # Example
///
/// ```
/// use benefits_engine::config::{FeatureFlag, FeatureFlags};
///
/// let flags = FeatureFlags::default().with(FeatureFlag::EnableHighSalaryCalculation, true);
/// let toggles = flags.resolve_toggles();
/// assert!(toggles.high_salary_surcharge);
/// assert!(!toggles.detailed_breakdown);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags {
    states: HashMap<FeatureFlag, bool>,
}

impl FeatureFlags {
    /// Every known flag switched on.
    pub fn all_enabled() -> Self {
        Self {
            states: FeatureFlag::ALL.into_iter().map(|flag| (flag, true)).collect(),
        }
    }

    /// Returns a copy with `flag` set to `enabled`.
    pub fn with(mut self, flag: FeatureFlag, enabled: bool) -> Self {
        self.states.insert(flag, enabled);
        self
    }

    /// Whether `flag` is on.
    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.states.get(&flag).copied().unwrap_or(false)
    }

    /// Every known flag with its state, keyed by name.
    pub fn all(&self) -> BTreeMap<&'static str, bool> {
        FeatureFlag::ALL
            .into_iter()
            .map(|flag| (flag.name(), self.is_enabled(flag)))
            .collect()
    }

    /// Looks up a flag by its configuration key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownFeatureFlag`] if no flag has that name.
    pub fn get_by_name(&self, name: &str) -> EngineResult<(FeatureFlag, bool)> {
        let flag = FeatureFlag::from_str(name)?;
        Ok((flag, self.is_enabled(flag)))
    }

    /// Snapshots the calculation switches for a single request.
    pub fn resolve_toggles(&self) -> FeatureToggles {
        FeatureToggles {
            high_salary_surcharge: self.is_enabled(FeatureFlag::EnableHighSalaryCalculation),
            senior_dependent_surcharge: self
                .is_enabled(FeatureFlag::EnableSeniorDependentSurcharge),
            detailed_breakdown: self.is_enabled(FeatureFlag::EnableDetailedPaycheckBreakdown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_are_disabled() {
        let flags = FeatureFlags::default();
        for flag in FeatureFlag::ALL {
            assert!(!flags.is_enabled(flag), "{} should be off", flag);
        }
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = "EnablePaycheckCalculation: true\nEnableHighSalaryCalculation: false\n";
        let flags: FeatureFlags = serde_yaml::from_str(yaml).unwrap();

        assert!(flags.is_enabled(FeatureFlag::EnablePaycheckCalculation));
        assert!(!flags.is_enabled(FeatureFlag::EnableHighSalaryCalculation));
        assert!(!flags.is_enabled(FeatureFlag::EnableDetailedPaycheckBreakdown));
    }

    #[test]
    fn test_unknown_flag_in_yaml_is_rejected() {
        let yaml = "EnableTimeTravel: true\n";
        let result: Result<FeatureFlags, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_toggles_maps_each_flag() {
        let flags = FeatureFlags::default()
            .with(FeatureFlag::EnableSeniorDependentSurcharge, true)
            .with(FeatureFlag::EnableDetailedPaycheckBreakdown, true);

        let toggles = flags.resolve_toggles();
        assert!(!toggles.high_salary_surcharge);
        assert!(toggles.senior_dependent_surcharge);
        assert!(toggles.detailed_breakdown);
    }

    #[test]
    fn test_all_lists_every_flag() {
        let flags = FeatureFlags::all_enabled().with(FeatureFlag::EnableDependentOperations, false);
        let all = flags.all();

        assert_eq!(all.len(), FeatureFlag::ALL.len());
        assert_eq!(all["EnablePaycheckCalculation"], true);
        assert_eq!(all["EnableDependentOperations"], false);
    }

    #[test]
    fn test_get_by_name() {
        let flags = FeatureFlags::all_enabled();
        let (flag, enabled) = flags.get_by_name("EnableHighSalaryCalculation").unwrap();
        assert_eq!(flag, FeatureFlag::EnableHighSalaryCalculation);
        assert!(enabled);
    }

    #[test]
    fn test_get_by_unknown_name_returns_error() {
        let flags = FeatureFlags::all_enabled();
        match flags.get_by_name("EnableTimeTravel") {
            Err(EngineError::UnknownFeatureFlag { name }) => assert_eq!(name, "EnableTimeTravel"),
            other => panic!("Expected UnknownFeatureFlag, got {:?}", other),
        }
    }

    #[test]
    fn test_service_level_flags_are_known() {
        let flags = FeatureFlags::default().with(FeatureFlag::EnableCaching, true);
        for name in [
            "EnableSwaggerUI",
            "EnableBulkOperations",
            "EnableAdvancedLogging",
            "EnableCaching",
            "EnableRateLimiting",
        ] {
            assert!(flags.get_by_name(name).is_ok(), "{} should be known", name);
        }
        assert_eq!(
            flags.get_by_name("EnableCaching").unwrap(),
            (FeatureFlag::EnableCaching, true)
        );
        assert_eq!(FeatureFlag::ALL.len(), 10);
        // Service-level flags never influence the calculation switches.
        assert_eq!(flags.resolve_toggles(), FeatureToggles::all_disabled());
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for flag in FeatureFlag::ALL {
            assert_eq!(FeatureFlag::from_str(flag.name()).unwrap(), flag);
        }
    }
}
