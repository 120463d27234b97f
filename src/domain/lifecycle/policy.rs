//! Lifecycle policy thresholds.

use serde::{Deserialize, Serialize};

/// Default hard cap on concurrently active documents.
pub const DEFAULT_MAX_ACTIVE: usize = 3;

/// Default inbox size above which triage is suggested.
pub const DEFAULT_INBOX_TRIAGE_THRESHOLD: usize = 5;

/// Default idle days after which an active document counts as stale.
pub const DEFAULT_STALE_AFTER_DAYS: i64 = 7;

/// Thresholds governing the capacity rules.
///
/// `max_active` is a hard cap enforced by the validator; the other two
/// only drive advisory warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecyclePolicy {
    /// Hard cap on IN_PROGRESS documents.
    pub max_active: usize,

    /// Inbox count above which triage is needed.
    pub inbox_triage_threshold: usize,

    /// Idle days above which an IN_PROGRESS document is stale.
    pub stale_after_days: i64,
}

impl LifecyclePolicy {
    /// Creates a policy with explicit thresholds.
    pub fn new(max_active: usize, inbox_triage_threshold: usize, stale_after_days: i64) -> Self {
        Self {
            max_active,
            inbox_triage_threshold,
            stale_after_days,
        }
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            max_active: DEFAULT_MAX_ACTIVE,
            inbox_triage_threshold: DEFAULT_INBOX_TRIAGE_THRESHOLD,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
        }
    }
}
