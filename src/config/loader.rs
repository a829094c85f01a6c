//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the cost rules
//! and feature flags from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::flags::{FeatureFlag, FeatureFlags};
use super::types::{CalculationConfig, FeatureToggles};

/// Loads and provides access to the benefits configuration.
///
/// # Directory Structure
///
/// ```text
/// config/benefits/
/// ├── calculation.yaml    # Cost rules and paycheck count
/// └── feature_flags.yaml  # Flag name -> enabled
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/benefits").unwrap();
/// println!("Paychecks per year: {}", loader.calculation().paychecks_per_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calculation: CalculationConfig,
    flags: FeatureFlags,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/benefits")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or an unknown flag (`ConfigParseError`)
    /// - The cost rules fail validation (`Configuration` / `InvalidArgument`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use benefits_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/benefits")?;
    /// # Ok::<(), benefits_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calculation = Self::load_yaml::<CalculationConfig>(&path.join("calculation.yaml"))?;
        let flags = Self::load_yaml::<FeatureFlags>(&path.join("feature_flags.yaml"))?;

        let loader = Self::new(calculation, flags)?;
        debug!(
            path = %path.display(),
            paychecks_per_year = loader.calculation.paychecks_per_year,
            "Loaded benefits configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from values already in memory, validating the cost rules.
    pub fn new(calculation: CalculationConfig, flags: FeatureFlags) -> EngineResult<Self> {
        calculation.validate()?;
        Ok(Self { calculation, flags })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the cost rules.
    pub fn calculation(&self) -> &CalculationConfig {
        &self.calculation
    }

    /// Returns the feature flag states.
    pub fn flags(&self) -> &FeatureFlags {
        &self.flags
    }

    /// Whether a single flag is on.
    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.flags.is_enabled(flag)
    }

    /// Resolves the calculation toggles for one request.
    pub fn toggles(&self) -> FeatureToggles {
        self.flags.resolve_toggles()
    }
}
