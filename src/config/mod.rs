//! Typed configuration for the document workspace
//!
//! Settings come from the process environment (with a `.env` file picked up
//! during development via `dotenvy`) and deserialize through the `config`
//! crate into plain structs. Every field has a default, so a bare environment
//! yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use docflow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Workspace root: {}", config.workspace.root.display());
//! ```

mod error;
mod policy;
mod workspace;

pub use error::{ConfigError, ValidationError};
pub use policy::PolicyConfig;
pub use workspace::WorkspaceConfig;

use serde::Deserialize;

/// Top-level configuration, one field per section.
///
/// Built by [`AppConfig::load()`]; call [`AppConfig::validate()`] before
/// handing values to the rest of the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the workspace lives on disk, plus the log filter.
    #[serde(default)]
    pub workspace: WorkspaceConfig,

    /// Lifecycle thresholds: active cap, inbox triage point, staleness window.
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Variables are namespaced under the `DOCFLOW` prefix and nest with a
    /// double underscore, so `DOCFLOW__WORKSPACE__ROOT=/srv/docs` sets
    /// `workspace.root` and `DOCFLOW__POLICY__MAX_ACTIVE=2` sets
    /// `policy.max_active`. A `.env` file in the working directory is applied
    /// first when present; unset sections fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DOCFLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.workspace.validate()?;
        self.policy.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Process environment is shared state; serialize these tests.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DOCFLOW__WORKSPACE__ROOT");
        env::remove_var("DOCFLOW__POLICY__MAX_ACTIVE");
        env::remove_var("DOCFLOW__POLICY__STALE_AFTER_DAYS");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let loaded = AppConfig::load();

        assert!(loaded.is_ok(), "load failed: {:?}", loaded.err());
        let config = loaded.unwrap();
        assert_eq!(config.workspace.root, PathBuf::from("./docflow"));
        assert_eq!(config.policy.max_active, 3);
        assert_eq!(config.policy.inbox_triage_threshold, 5);
        assert_eq!(config.policy.stale_after_days, 7);
    }

    #[test]
    fn test_validate_default_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_workspace_root() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DOCFLOW__WORKSPACE__ROOT", "/srv/docs");
        let loaded = AppConfig::load();
        clear_env();

        let config = loaded.unwrap();
        assert_eq!(config.workspace.root, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_custom_policy_thresholds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DOCFLOW__POLICY__MAX_ACTIVE", "2");
        env::set_var("DOCFLOW__POLICY__STALE_AFTER_DAYS", "14");
        let loaded = AppConfig::load();
        clear_env();

        let config = loaded.unwrap();
        assert_eq!(config.policy.max_active, 2);
        assert_eq!(config.policy.stale_after_days, 14);
        // Untouched values keep their defaults.
        assert_eq!(config.policy.inbox_triage_threshold, 5);
    }
}
