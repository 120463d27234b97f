//! Folder capacity monitor.
//!
//! A pure projection over a snapshot of all managed documents. Every rule
//! is evaluated independently and all findings are returned; nothing
//! short-circuits.

use crate::domain::document::Document;
use crate::domain::foundation::{DocDate, DocumentStatus};

use super::{CapacityWarning, LifecyclePolicy};

/// Evaluates the capacity and staleness rules over a document snapshot.
#[derive(Debug, Clone, Default)]
pub struct CapacityMonitor {
    policy: LifecyclePolicy,
}

impl CapacityMonitor {
    /// Creates a monitor with the given policy.
    pub fn new(policy: LifecyclePolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    /// Checks the snapshot, returning all warnings in a fixed order:
    /// the inbox-triage finding first, then the active-cap finding, then
    /// one stale finding per offending document in snapshot order.
    pub fn check_capacity(&self, documents: &[Document], today: DocDate) -> Vec<CapacityWarning> {
        let mut warnings = Vec::new();

        let inbox_count = documents
            .iter()
            .filter(|doc| doc.status() == DocumentStatus::Inbox)
            .count();
        if inbox_count > self.policy.inbox_triage_threshold {
            warnings.push(CapacityWarning::InboxTriageNeeded { count: inbox_count });
        }

        let active_count = documents
            .iter()
            .filter(|doc| doc.status() == DocumentStatus::InProgress)
            .count();
        if active_count > self.policy.max_active {
            warnings.push(CapacityWarning::TooManyActive {
                count: active_count,
            });
        }

        for doc in documents
            .iter()
            .filter(|doc| doc.status() == DocumentStatus::InProgress)
        {
            let days_idle = doc.days_idle(today);
            if days_idle > self.policy.stale_after_days {
                warnings.push(CapacityWarning::Stale {
                    name: doc.name().clone(),
                    days_idle,
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;
