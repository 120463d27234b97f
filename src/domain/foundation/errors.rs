//! Errors raised while building and moving domain values.

use std::fmt;
use thiserror::Error;

/// Rejections produced when constructing a value object from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} out of range: {actual} not in {min}..={max}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("{field} is malformed: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised when a requested lifecycle transition is rejected.
///
/// Rejections are permanent: there is no retry policy, the caller must
/// correct the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Illegal transition from {from} to {to}")]
    Illegal { from: String, to: String },

    #[error("Active document cap reached: {active} already in progress (limit {limit})")]
    CapacityExceeded { active: usize, limit: usize },
}

impl TransitionError {
    /// Creates an illegal transition error for the given edge.
    pub fn illegal(from: impl fmt::Display, to: impl fmt::Display) -> Self {
        TransitionError::Illegal {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Creates a capacity exceeded error for the active-document cap.
    pub fn capacity_exceeded(active: usize, limit: usize) -> Self {
        TransitionError::CapacityExceeded { active, limit }
    }
}

/// Stable machine-readable codes, grouped by failure category.
///
/// Application errors map onto these so callers can branch without
/// string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Lookup
    DocumentNotFound,

    // Lifecycle
    IllegalTransition,
    CapacityExceeded,

    // Storage
    DuplicateDocument,
    MalformedFile,
    StorageError,

    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::IllegalTransition => "ILLEGAL_TRANSITION",
            ErrorCode::CapacityExceeded => "CAPACITY_EXCEEDED",
            ErrorCode::DuplicateDocument => "DUPLICATE_DOCUMENT",
            ErrorCode::MalformedFile => "MALFORMED_FILE",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
