//! Triage advisor.

use crate::domain::document::Document;
use crate::domain::foundation::{DocumentStatus, StateMachine};

/// Suggests candidate target statuses for a document.
///
/// A read-only projection of the lifecycle edge table: no side effects,
/// and the suggestions are non-binding. The caller picks the actual move.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageAdvisor;

impl TriageAdvisor {
    /// Creates an advisor.
    pub fn new() -> Self {
        Self
    }

    /// Returns the candidate targets in presentation order
    /// (IN_PROGRESS, COMPLETED, MISC). Terminal statuses yield nothing.
    pub fn suggest(&self, document: &Document) -> Vec<DocumentStatus> {
        document.status().valid_transitions()
    }
}
