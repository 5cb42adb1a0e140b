//! Error types for Modforge
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Modforge operations
///
/// This enum encompasses all possible errors that can occur during
/// workspace operations: input validation, calls to the mod services,
/// record lookups, configuration loading, and archive export.
#[derive(Error, Debug)]
pub enum ModforgeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation failures (blank description, missing selection,
    /// wrong file type). No request is sent when one of these occurs.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mod service failures (non-2xx response or transport failure)
    #[error("Service error: {0}")]
    Service(String),

    /// Lookup of a record id absent from the store, or export of a record
    /// that has no stored content
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Archive assembly errors
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type alias for Modforge operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `ModforgeError` behind an `anyhow::Error`, if there is one.
///
/// The workspace flows match on the error taxonomy (validation vs service
/// vs not-found) to decide how a failure is surfaced to the user.
pub fn as_modforge_error(err: &anyhow::Error) -> Option<&ModforgeError> {
    err.downcast_ref::<ModforgeError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ModforgeError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_validation_error_display() {
        let error = ModforgeError::Validation("description is empty".to_string());
        assert_eq!(error.to_string(), "Validation error: description is empty");
    }

    #[test]
    fn test_service_error_display() {
        let error = ModforgeError::Service("generation failed".to_string());
        assert_eq!(error.to_string(), "Service error: generation failed");
    }

    #[test]
    fn test_not_found_error_display() {
        let error = ModforgeError::NotFound("mod abc123".to_string());
        assert_eq!(error.to_string(), "Not found: mod abc123");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ModforgeError = io_error.into();
        assert!(matches!(error, ModforgeError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: ModforgeError = json_error.into();
        assert!(matches!(error, ModforgeError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: ModforgeError = yaml_error.into();
        assert!(matches!(error, ModforgeError::Yaml(_)));
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = ModforgeError::Validation("empty".to_string()).into();
        assert!(matches!(
            as_modforge_error(&err),
            Some(ModforgeError::Validation(_))
        ));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModforgeError>();
    }
}
