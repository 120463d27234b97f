//! Advisory capacity warnings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::document::DocumentName;

/// Advisory finding from a capacity check.
///
/// Warnings are not errors: they never block reads or transitions,
/// and a check returns every applicable warning rather than stopping
/// at the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CapacityWarning {
    /// The inbox has grown past the triage threshold.
    InboxTriageNeeded { count: usize },

    /// More documents are active than the cap allows.
    TooManyActive { count: usize },

    /// An active document has idled past the staleness threshold.
    Stale { name: DocumentName, days_idle: i64 },
}

impl fmt::Display for CapacityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityWarning::InboxTriageNeeded { count } => {
                write!(f, "{} documents in INBOX, triage needed", count)
            }
            CapacityWarning::TooManyActive { count } => {
                write!(f, "{} documents IN_PROGRESS, above the active cap", count)
            }
            CapacityWarning::Stale { name, days_idle } => {
                write!(f, "{} idle for {} days", name, days_idle)
            }
        }
    }
}
