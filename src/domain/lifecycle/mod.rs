//! Lifecycle module - Transition validation, capacity monitoring, triage.
//!
//! The pure rule core: a validator enforcing the edge table and the
//! active-document cap, a monitor producing advisory warnings over a
//! snapshot, and an advisor projecting candidate moves.

mod advisor;
mod monitor;
mod policy;
mod validator;
mod warning;

pub use advisor::TriageAdvisor;
pub use monitor::CapacityMonitor;
pub use policy::{
    LifecyclePolicy, DEFAULT_INBOX_TRIAGE_THRESHOLD, DEFAULT_MAX_ACTIVE, DEFAULT_STALE_AFTER_DAYS,
};
pub use validator::LifecycleValidator;
pub use warning::CapacityWarning;
