//! DocumentStatus enum for the managed-document lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StateMachine, ValidationError};

/// Lifecycle status of a managed document.
///
/// Documents are created in `Inbox`, optionally move through `InProgress`,
/// and end in `Completed` or `Misc`. The terminal statuses are absorbing:
/// a document is never deleted, only relocated between the four states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Inbox,
    InProgress,
    Completed,
    Misc,
}

impl DocumentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Inbox,
        DocumentStatus::InProgress,
        DocumentStatus::Completed,
        DocumentStatus::Misc,
    ];

    /// Returns the on-disk folder name for this status.
    ///
    /// Folders are numbered so directory listings sort in lifecycle order.
    pub fn folder_name(&self) -> &'static str {
        match self {
            DocumentStatus::Inbox => "1-INBOX",
            DocumentStatus::InProgress => "2-IN_PROGRESS",
            DocumentStatus::Completed => "3-COMPLETED",
            DocumentStatus::Misc => "4-MISC",
        }
    }

    /// Returns the `Status:` header spelling.
    ///
    /// The header contract spells the active status `IN PROGRESS`
    /// (space, not underscore).
    pub fn header_label(&self) -> &'static str {
        match self {
            DocumentStatus::Inbox => "INBOX",
            DocumentStatus::InProgress => "IN PROGRESS",
            DocumentStatus::Completed => "COMPLETED",
            DocumentStatus::Misc => "MISC",
        }
    }

    /// Parses a `Status:` header label.
    pub fn from_header_label(label: &str) -> Result<Self, ValidationError> {
        match label {
            "INBOX" => Ok(DocumentStatus::Inbox),
            "IN PROGRESS" => Ok(DocumentStatus::InProgress),
            "COMPLETED" => Ok(DocumentStatus::Completed),
            "MISC" => Ok(DocumentStatus::Misc),
            other => Err(ValidationError::invalid_format(
                "status",
                format!(
                    "expected INBOX, IN PROGRESS, COMPLETED or MISC, got '{}'",
                    other
                ),
            )),
        }
    }

    /// Parses an on-disk folder name.
    pub fn from_folder_name(name: &str) -> Result<Self, ValidationError> {
        match name {
            "1-INBOX" => Ok(DocumentStatus::Inbox),
            "2-IN_PROGRESS" => Ok(DocumentStatus::InProgress),
            "3-COMPLETED" => Ok(DocumentStatus::Completed),
            "4-MISC" => Ok(DocumentStatus::Misc),
            other => Err(ValidationError::invalid_format(
                "folder",
                format!("'{}' is not a status folder", other),
            )),
        }
    }

    /// Returns true while the document can still be relocated.
    pub fn is_mutable(&self) -> bool {
        matches!(self, DocumentStatus::Inbox | DocumentStatus::InProgress)
    }
}

impl StateMachine for DocumentStatus {
    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Inbox -> InProgress | Completed | Misc
    /// - InProgress -> Completed | Misc
    fn can_transition_to(&self, target: &Self) -> bool {
        use DocumentStatus::*;
        matches!(
            (self, target),
            (Inbox, InProgress)
                | (Inbox, Completed)
                | (Inbox, Misc)
                | (InProgress, Completed)
                | (InProgress, Misc)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DocumentStatus::*;
        match self {
            Inbox => vec![InProgress, Completed, Misc],
            InProgress => vec![Completed, Misc],
            Completed => vec![],
            Misc => vec![],
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentStatus::Inbox => "INBOX",
            DocumentStatus::InProgress => "IN_PROGRESS",
            DocumentStatus::Completed => "COMPLETED",
            DocumentStatus::Misc => "MISC",
        };
        write!(f, "{}", s)
    }
}
