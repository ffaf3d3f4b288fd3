//! Persistence boundary for the lock state.
//!
//! The controller persists the locked language on every transition so the
//! lock survives restarts. Read and write failures degrade to "unlocked"
//! and a warning; they never reach the user.

use std::path::PathBuf;

use langlock_engine::LanguageHandle;
use tracing::warn;

use crate::config::PersistedState;

/// Stores the locked language across restarts.
pub trait StateStore {
    /// The persisted locked language, or `None` if unlocked, absent, or
    /// unreadable.
    fn load(&self) -> Option<LanguageHandle>;

    /// Persist the locked language (`None` for unlocked). Must not fail
    /// observably.
    fn persist(&mut self, language: Option<LanguageHandle>);
}

/// TOML-file-backed store under the per-user data directory.
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    /// Open the store at the default state file location.
    ///
    /// When no per-user data directory can be determined the store still
    /// works, it just forgets the state on shutdown.
    pub fn open() -> Self {
        let path = PersistedState::state_file();
        if path.is_none() {
            warn!("no data directory available, lock state will not survive restarts");
        }
        Self { path }
    }

    /// Open the store at a specific file.
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Option<LanguageHandle> {
        let path = self.path.as_deref()?;
        match PersistedState::load_from(path) {
            Ok(state) => state.locked_language(),
            Err(e) => {
                warn!("failed to read state file {:?}: {}", path, e);
                None
            }
        }
    }

    fn persist(&mut self, language: Option<LanguageHandle>) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(e) = PersistedState::from_language(language).save_to(path) {
            warn!("failed to write state file {:?}: {}", path, e);
        }
    }
}

/// In-process store for hosts that persist the value elsewhere (e.g. an IDE
/// preference store), and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    language: Option<LanguageHandle>,
}

impl MemoryStore {
    /// Create a store seeded with a previously persisted language.
    pub fn seeded(language: Option<LanguageHandle>) -> Self {
        Self { language }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<LanguageHandle> {
        self.language
    }

    fn persist(&mut self, language: Option<LanguageHandle>) {
        self.language = language;
    }
}
