//! Error types for hostname validation.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the validation engine.
///
/// Rule violations are never errors: they come back as `false` or as entries
/// in a [`ViolationReport`](crate::ViolationReport). The only exceptional
/// path is a failed TLD registry initialization, which is a configuration
/// problem rather than a property of the candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ValidationError {
    /// The bundled TLD registry could not be parsed, or contained no entries.
    #[error("TLD registry error: {0}")]
    TldRegistry(String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::TldRegistry("malformed TLD data".to_string());
        assert_eq!(err.to_string(), "TLD registry error: malformed TLD data");
    }

    #[test]
    fn test_error_serialization() {
        let err = ValidationError::TldRegistry("empty set".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "TldRegistry");
        assert_eq!(json["details"], "empty set");
    }
}
