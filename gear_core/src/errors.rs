//! # Error Types
//!
//! Structured error types for gear_core. The engines themselves never fail:
//! incomplete input yields `None` and physically invalid input yields
//! non-finite numbers. These errors are raised by the optional validation
//! helpers, the finiteness checks on results, and settings file handling.
//!
//! ## Example
//!
//! ```rust
//! use gear_core::errors::{CalcError, CalcResult};
//!
//! fn validate_module(module_mm: f64) -> CalcResult<()> {
//!     if module_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "module_mm".to_string(),
//!             value: module_mm.to_string(),
//!             reason: "Module must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for gear_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for gear calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A computed quantity came out as NaN or infinity
    #[error("Non-finite result for '{quantity}': {value} - check angle inputs")]
    NonFiniteResult { quantity: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(quantity: impl Into<String>, value: f64) -> Self {
        CalcError::NonFiniteResult {
            quantity: quantity.into(),
            value: value.to_string(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the numbers a user typed, as opposed to
    /// I/O or schema problems.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::NonFiniteResult { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Return `NonFiniteResult` for the first non-finite `(name, value)` pair.
pub(crate) fn ensure_finite(values: &[(&str, f64)]) -> CalcResult<()> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, v)) => Err(CalcError::non_finite(*name, *v)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("module_mm", "-2", "Module must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"InvalidInput\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("teeth", "0", "at least 1").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::non_finite("W", f64::NAN).error_code(), "NON_FINITE_RESULT");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::non_finite("d", f64::INFINITY).is_input_error());
        assert!(!CalcError::file_error("open", "a.json", "missing").is_input_error());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[("d", 40.0), ("da", 44.0)]).is_ok());
        let err = ensure_finite(&[("d", 40.0), ("W", f64::NAN)]).unwrap_err();
        match err {
            CalcError::NonFiniteResult { quantity, .. } => assert_eq!(quantity, "W"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
