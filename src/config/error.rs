//! Failures surfaced while reading or checking configuration

use thiserror::Error;

/// Why configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration from environment: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Why a loaded configuration value was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("workspace root must not be empty")]
    EmptyWorkspaceRoot,

    #[error("max_active must be at least 1")]
    InvalidMaxActive,

    #[error("inbox_triage_threshold must be at least 1")]
    InvalidInboxThreshold,

    #[error("stale_after_days must be at least 1")]
    InvalidStaleWindow,
}
