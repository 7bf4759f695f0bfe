//! # Error Types
//!
//! Structured error types for folio_core. Page logic itself never fails;
//! these cover the edges where data comes in from outside: catalog files
//! and settings files.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::errors::{FolioError, FolioResult};
//!
//! fn validate_expiry(expiry_ms: u64) -> FolioResult<()> {
//!     if expiry_ms == 0 {
//!         return Err(FolioError::InvalidInput {
//!             field: "selection.expiry_ms".to_string(),
//!             value: expiry_ms.to_string(),
//!             reason: "Expiry delay must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for folio_core operations
pub type FolioResult<T> = Result<T, FolioError>;

/// Structured error type for catalog and settings operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FolioError {
    /// An input value is invalid (duplicate slug, zero delay, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or TOML parsing error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Catalog schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FolioError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FolioError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FolioError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        FolioError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::InvalidInput { .. } => "INVALID_INPUT",
            FolioError::FileError { .. } => "FILE_ERROR",
            FolioError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FolioError::VersionMismatch { .. } => "VERSION_MISMATCH",
            FolioError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FolioError::invalid_input("slug", "harbour-house", "Duplicate slug");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));

        let roundtrip: FolioError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FolioError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(
            FolioError::file_error("open", "/tmp/x.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        let error = FolioError::file_error("open", "catalog.json", "No such file");
        assert_eq!(error.to_string(), "File error: open on 'catalog.json' - No such file");
    }
}
