//! On-disk representation of the lock state.
//!
//! A single entry survives restarts: the handle of the locked language, `0`
//! when unlocked. Stored as a small TOML file in the per-user data
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use langlock_engine::LanguageHandle;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Persisted lock state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PersistedState {
    /// Handle of the locked input language, `0` when unlocked.
    #[serde(default)]
    pub locked_language_id: i64,
}

/// Get the project directories for langlock.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "gilecode", "langlock")
}

impl PersistedState {
    /// Build the persisted form of a controller state.
    pub fn from_language(language: Option<LanguageHandle>) -> Self {
        Self {
            locked_language_id: language.map_or(0, LanguageHandle::raw),
        }
    }

    /// The locked language, if any.
    pub fn locked_language(&self) -> Option<LanguageHandle> {
        LanguageHandle::from_raw(self.locked_language_id)
    }

    /// Get the state file path.
    ///
    /// Default: `~/.local/share/langlock/state.toml` (platform equivalent).
    pub fn state_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join("state.toml"))
    }

    /// Load the persisted state from a specific file.
    ///
    /// A missing file is not an error: the state defaults to unlocked.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("state file not found, defaulting to unlocked");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let state = toml::from_str(&content)?;
        Ok(state)
    }

    /// Save the persisted state to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default state file, degrading to unlocked on any error.
    pub fn load() -> Self {
        let Some(path) = Self::state_file() else {
            warn!("could not determine data directory, defaulting to unlocked");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(state) => state,
            Err(e) => {
                warn!("failed to read state file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
