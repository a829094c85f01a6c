//! Error types for the Benefits Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! calculating paychecks.

use thiserror::Error;

/// The main error type for the Benefits Engine.
///
/// Every error is a deterministic function of the input: calling an
/// operation again with the same arguments reproduces the same error.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input value violated the engine's contract (e.g. a negative salary).
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument or field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The calculation configuration cannot be used (e.g. zero paychecks per year).
    #[error("Configuration error: {message}")]
    Configuration {
        /// A description of the configuration problem.
        message: String,
    },

    /// A feature flag name did not match any known flag.
    #[error("Feature flag not found: {name}")]
    UnknownFeatureFlag {
        /// The flag name that was requested.
        name: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_argument_displays_field_and_message() {
        let error = EngineError::invalid_argument("annual_salary", "cannot be negative");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'annual_salary': cannot be negative"
        );
    }

    #[test]
    fn test_configuration_error_displays_message() {
        let error = EngineError::Configuration {
            message: "paychecks_per_year must be positive, got 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration error: paychecks_per_year must be positive, got 0"
        );
    }

    #[test]
    fn test_unknown_feature_flag_displays_name() {
        let error = EngineError::UnknownFeatureFlag {
            name: "EnableTimeTravel".to_string(),
        };
        assert_eq!(error.to_string(), "Feature flag not found: EnableTimeTravel");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_argument() -> EngineResult<()> {
            Err(EngineError::invalid_argument("salary", "negative"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_argument()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
