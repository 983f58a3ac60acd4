//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fakemaker/fakemaker.toml`
//! 3. Local config: `<local_dir>/.fakemaker.toml`
//! 4. Environment variables: `FAKEMAKER_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::RepositoryError;
use crate::domain::ContentReference;

/// Unified configuration for fakemaker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// First reference id a new repository assigns (default: 1)
    pub start_id: u64,
    /// Tracing filter used by test logging when `RUST_LOG` is unset (default: "info")
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_id: 1,
            log_filter: "info".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub start_id: Option<u64>,
    pub log_filter: Option<String>,
}

/// Get the XDG config directory for fakemaker.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fakemaker").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("fakemaker.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".fakemaker.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, RepositoryError> {
    let content = std::fs::read_to_string(path).map_err(|e| RepositoryError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| RepositoryError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> RepositoryError {
    RepositoryError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            start_id: overlay.start_id.unwrap_or(self.start_id),
            log_filter: overlay
                .log_filter
                .clone()
                .unwrap_or_else(|| self.log_filter.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.fakemaker.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, RepositoryError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply FAKEMAKER_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, RepositoryError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("FAKEMAKER").try_parsing(true))
            .build()
            .map_err(config_err)?;

        match config.get::<u64>("start_id") {
            Ok(val) => settings.start_id = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("log_filter") {
            settings.log_filter = val;
        }

        Ok(settings)
    }

    pub(crate) fn validate(&self) -> Result<(), RepositoryError> {
        if self.start_id == ContentReference::EMPTY_ID {
            return Err(RepositoryError::Config {
                message: format!(
                    "start_id must not be {}, it is the empty reference",
                    ContentReference::EMPTY_ID
                ),
            });
        }
        Ok(())
    }
}
