//! Lifecycle transition validation.

use crate::domain::document::Document;
use crate::domain::foundation::{DocDate, DocumentStatus, StateMachine, TransitionError};

use super::LifecyclePolicy;

/// Validates requested status transitions against the lifecycle edge
/// table and the active-document cap.
///
/// Pure: the active count comes from the caller's snapshot and no I/O
/// happens here. Moving the file is the storage layer's job once
/// validation has produced the new document.
#[derive(Debug, Clone, Default)]
pub struct LifecycleValidator {
    policy: LifecyclePolicy,
}

impl LifecycleValidator {
    /// Creates a validator with the given policy.
    pub fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    /// Validates and applies a transition, returning the moved document.
    ///
    /// `active_count` is the number of IN_PROGRESS documents in the
    /// caller's snapshot, not counting `document` itself.
    ///
    /// # Errors
    ///
    /// - `Illegal` if the edge is not in the lifecycle table
    /// - `CapacityExceeded` if a legal move would enter IN_PROGRESS while
    ///   the cap is already reached
    pub fn validate_transition(
        &self,
        document: &Document,
        target: DocumentStatus,
        active_count: usize,
        today: DocDate,
    ) -> Result<Document, TransitionError> {
        // Illegal edges win over the cap; the guard only covers legal
        // entries into IN_PROGRESS.
        let legal = document.status().can_transition_to(&target);
        if legal && target == DocumentStatus::InProgress && active_count >= self.policy.max_active {
            return Err(TransitionError::capacity_exceeded(
                active_count,
                self.policy.max_active,
            ));
        }
        document.transition_to(target, today)
    }
}
