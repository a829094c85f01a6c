//! Configuration loading and management for the Benefits Engine.
//!
//! This module provides the cost rules ([`CalculationConfig`]), the feature
//! flag store ([`FeatureFlags`]) and the per-request switches derived from it
//! ([`FeatureToggles`]), plus a loader that reads both from YAML.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/benefits").unwrap();
//! let toggles = loader.toggles();
//! println!("Detailed breakdown: {}", toggles.detailed_breakdown);
//! ```

mod flags;
mod loader;
mod types;

pub use flags::{FeatureFlag, FeatureFlags};
pub use loader::ConfigLoader;
pub use types::{CalculationConfig, DEFAULT_PAYCHECKS_PER_YEAR, FeatureToggles};
