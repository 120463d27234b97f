//! State machine trait for status enums.
//!
//! A status enum implements the two table methods; legality checks and
//! the validated transition come as defaults on top of them.

use super::TransitionError;

/// Trait for status enums with a fixed transition table.
///
/// `can_transition_to` answers a single edge, `valid_transitions` lists
/// the outgoing edges in presentation order. The two must agree: every
/// listed target is reachable, everything else is not.
///
/// # Example
///
/// ```ignore
/// let next = DocumentStatus::Inbox.transition_to(DocumentStatus::InProgress)?;
/// assert!(DocumentStatus::Completed.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if the edge from self to target exists.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns the reachable targets in presentation order.
    ///
    /// Callers surfacing candidates to a user keep the order as-is.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validated transition: the target if the edge exists, an error
    /// naming both endpoints otherwise.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if !self.can_transition_to(&target) {
            return Err(TransitionError::illegal(
                format!("{:?}", self),
                format!("{:?}", target),
            ));
        }
        Ok(target)
    }

    /// True when no outgoing edge exists.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
