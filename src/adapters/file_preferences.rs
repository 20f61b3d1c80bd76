//! File-based preference store adapter.
//!
//! Wraps [`PreferencesManager`] and implements [`PreferenceStore`]. The
//! files are small, so the blocking I/O runs inline.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::prefs::{PreferencesManager, ProfilePrefs, SessionPrefs};
use crate::traits::{PreferenceStore, PreferencesError};

#[derive(Debug, Clone)]
pub struct FilePreferences {
    manager: PreferencesManager,
}

impl FilePreferences {
    /// Store rooted at `~/.coffeu`.
    pub fn new() -> Result<Self, PreferencesError> {
        PreferencesManager::new()
            .map(|manager| Self { manager })
            .ok_or(PreferencesError::NoPreferencesDir)
    }

    /// Store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            manager: PreferencesManager::with_dir(dir),
        }
    }

    pub fn manager(&self) -> &PreferencesManager {
        &self.manager
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn load_session(&self) -> Result<SessionPrefs, PreferencesError> {
        Ok(self.manager.load_session())
    }

    async fn save_session(&self, prefs: &SessionPrefs) -> Result<(), PreferencesError> {
        self.manager
            .save_session(prefs)
            .map_err(|e| PreferencesError::SaveFailed(e.to_string()))
    }

    async fn clear_session(&self) -> Result<(), PreferencesError> {
        self.manager
            .clear_session()
            .map_err(|e| PreferencesError::ClearFailed(e.to_string()))
    }

    async fn load_profile(&self) -> Result<ProfilePrefs, PreferencesError> {
        Ok(self.manager.load_profile())
    }

    async fn save_profile(&self, prefs: &ProfilePrefs) -> Result<(), PreferencesError> {
        self.manager
            .save_profile(prefs)
            .map_err(|e| PreferencesError::SaveFailed(e.to_string()))
    }
}
