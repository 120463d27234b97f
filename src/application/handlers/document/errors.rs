//! Errors shared by the document workflow handlers.

use thiserror::Error;

use crate::domain::document::DocumentName;
use crate::domain::foundation::{ErrorCode, TransitionError, ValidationError};
use crate::ports::DocumentStoreError;

/// Errors that can occur while handling a document command or query.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(DocumentName),

    #[error("Document already exists: {0}")]
    DuplicateName(DocumentName),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("Malformed stored document {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DocumentError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::NotFound(_) => ErrorCode::DocumentNotFound,
            DocumentError::DuplicateName(_) => ErrorCode::DuplicateDocument,
            DocumentError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            DocumentError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            DocumentError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            DocumentError::Transition(TransitionError::Illegal { .. }) => {
                ErrorCode::IllegalTransition
            }
            DocumentError::Transition(TransitionError::CapacityExceeded { .. }) => {
                ErrorCode::CapacityExceeded
            }
            DocumentError::Malformed { .. } => ErrorCode::MalformedFile,
            DocumentError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DocumentStoreError> for DocumentError {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::NotFound(name) => DocumentError::NotFound(name),
            DocumentStoreError::Duplicate(name) => DocumentError::DuplicateName(name),
            DocumentStoreError::Malformed { path, reason } => {
                DocumentError::Malformed { path, reason }
            }
            DocumentStoreError::Io(reason) => DocumentError::Storage(reason),
        }
    }
}
