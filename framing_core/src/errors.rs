//! # Error Types
//!
//! Structured error types for framing_core. Every failure carries enough
//! context (field, offending value, reason) for a caller to report it or
//! fix the input programmatically.
//!
//! ## Example
//!
//! ```rust
//! use framing_core::errors::{FramingError, FramingResult};
//!
//! fn validate_width(width_ft: f64) -> FramingResult<()> {
//!     if width_ft <= 0.0 {
//!         return Err(FramingError::invalid_dimension(
//!             "width_ft",
//!             width_ft.to_string(),
//!             "Dimension must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for framing_core operations
pub type FramingResult<T> = Result<T, FramingError>;

/// Structured error type for framing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FramingError {
    /// A building dimension is non-finite, non-positive, or out of range.
    /// Raised before any framing formula runs.
    #[error("Invalid dimension for '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Any other invalid input (empty house name, unknown unit, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No house record with this name
    #[error("House not found: {name}")]
    HouseNotFound { name: String },

    /// A house record with this name already exists
    #[error("House already exists: {name}")]
    DuplicateHouse { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Store file is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Store schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl FramingError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FramingError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FramingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a HouseNotFound error
    pub fn house_not_found(name: impl Into<String>) -> Self {
        FramingError::HouseNotFound { name: name.into() }
    }

    /// Create a DuplicateHouse error
    pub fn duplicate_house(name: impl Into<String>) -> Self {
        FramingError::DuplicateHouse { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FramingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        FramingError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        FramingError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// The engine is deterministic, so only a contended store lock qualifies.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FramingError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FramingError::InvalidDimension { .. } => "INVALID_DIMENSION",
            FramingError::InvalidInput { .. } => "INVALID_INPUT",
            FramingError::HouseNotFound { .. } => "HOUSE_NOT_FOUND",
            FramingError::DuplicateHouse { .. } => "DUPLICATE_HOUSE",
            FramingError::FileError { .. } => "FILE_ERROR",
            FramingError::FileLocked { .. } => "FILE_LOCKED",
            FramingError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FramingError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
