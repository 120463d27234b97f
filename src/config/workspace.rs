//! Workspace configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Workspace configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    /// Root directory holding the four status folders
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl WorkspaceConfig {
    /// Validate workspace configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root.as_os_str().is_empty() {
            return Err(ValidationError::EmptyWorkspaceRoot);
        }
        Ok(())
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            log_level: default_log_level(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("./docflow")
}

fn default_log_level() -> String {
    "info,docflow=debug".to_string()
}
