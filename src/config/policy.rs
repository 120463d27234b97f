//! Lifecycle policy configuration

use serde::Deserialize;

use crate::domain::lifecycle::LifecyclePolicy;

use super::error::ValidationError;

/// Lifecycle threshold configuration
///
/// Mirrors [`LifecyclePolicy`] with environment-overridable values.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Hard cap on concurrently active documents
    #[serde(default = "default_max_active")]
    pub max_active: usize,

    /// Inbox count above which a triage warning fires
    #[serde(default = "default_inbox_triage_threshold")]
    pub inbox_triage_threshold: usize,

    /// Idle days after which an active document counts as stale
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: i64,
}

impl PolicyConfig {
    /// Convert into the domain policy object
    pub fn to_policy(&self) -> LifecyclePolicy {
        LifecyclePolicy::new(
            self.max_active,
            self.inbox_triage_threshold,
            self.stale_after_days,
        )
    }

    /// Validate policy configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_active == 0 {
            return Err(ValidationError::InvalidMaxActive);
        }
        if self.inbox_triage_threshold == 0 {
            return Err(ValidationError::InvalidInboxThreshold);
        }
        if self.stale_after_days < 1 {
            return Err(ValidationError::InvalidStaleWindow);
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_active: default_max_active(),
            inbox_triage_threshold: default_inbox_triage_threshold(),
            stale_after_days: default_stale_after_days(),
        }
    }
}

fn default_max_active() -> usize {
    LifecyclePolicy::default().max_active
}

fn default_inbox_triage_threshold() -> usize {
    LifecyclePolicy::default().inbox_triage_threshold
}

fn default_stale_after_days() -> i64 {
    LifecyclePolicy::default().stale_after_days
}
