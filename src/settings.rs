//! TOML-backed defaults for new temporary directories.
//!
//! ```toml
//! location = "~/scratch"
//! force = false
//! delete_when_dropped = true
//! ```

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::fs_op::path::expand_tilde;

/// Environment variable that overrides the configured base location.
pub const LOCATION_ENV: &str = "SCRATCH_DIR_LOCATION";

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Defaults applied by `TemporaryDirectory::from_settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Parent directory; the system temporary directory when unset.
    pub location: Option<PathBuf>,
    pub force: bool,
    pub delete_when_dropped: bool,
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Apply `SCRATCH_DIR_LOCATION` when it is set to a non-empty value.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = std::env::var_os(LOCATION_ENV) {
            if !v.is_empty() {
                self.location = Some(PathBuf::from(v));
            }
        }
        self
    }

    /// The configured location with `~` expanded, or the system temporary
    /// directory.
    pub fn location_or_default(&self) -> PathBuf {
        match &self.location {
            Some(p) => p
                .to_str()
                .filter(|s| s.starts_with('~'))
                .and_then(expand_tilde)
                .unwrap_or_else(|| p.clone()),
            None => std::env::temp_dir(),
        }
    }
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(s) => {
            debug!("loaded settings from {}", path.display());
            Settings::from_toml(&s)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Settings::default()),
        Err(e) => Err(e.into()),
    }
}

/// Per-user settings file: `<config dir>/scratch_dir/settings.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "scratch_dir").map(|d| d.config_dir().join("settings.toml"))
}
