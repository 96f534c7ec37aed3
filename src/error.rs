//! Error types for rollcall.
//!
//! Only configuration and output concerns can fail. The risk flag raised
//! during evaluation is not an error: see [`crate::cohort::flagging`].

use thiserror::Error;

/// Result type alias for rollcall operations.
pub type CohortResult<T> = Result<T, CohortError>;

/// Unified error type for all rollcall operations.
#[derive(Debug, Error)]
pub enum CohortError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CohortError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for CohortError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_config() {
        let err = CohortError::config("weeks must be positive");
        assert!(matches!(err, CohortError::Config { .. }));
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("weeks must be positive"));
    }

    #[test]
    fn test_error_serialization() {
        let err = CohortError::serialization("failed to serialize");
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("failed to serialize"));
    }

    #[test]
    fn test_error_io() {
        let err = CohortError::Io(std::io::Error::other("file not found"));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_yaml() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err = CohortError::from(yaml_err);
        assert!(matches!(err, CohortError::YamlParse(_)));
        assert!(err.to_string().contains("YAML parsing error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        let err = CohortError::from(json_err);
        assert!(matches!(err, CohortError::Serialization(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = CohortError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
