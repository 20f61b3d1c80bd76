//! In-memory preference store for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::prefs::{ProfilePrefs, SessionPrefs};
use crate::traits::{PreferenceStore, PreferencesError};

/// Preference store that keeps everything in memory.
///
/// Clones share state. Saving can be made to fail to exercise the
/// "persisting the flags failed" path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    session: Arc<Mutex<SessionPrefs>>,
    profile: Arc<Mutex<ProfilePrefs>>,
    save_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already remembers a session.
    pub fn with_session(session: SessionPrefs) -> Self {
        let prefs = Self::new();
        *prefs.session.lock().unwrap() = session;
        prefs
    }

    /// Configure whether saves should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Current session flags, read synchronously.
    pub fn session(&self) -> SessionPrefs {
        self.session.lock().unwrap().clone()
    }

    /// Current profile store, read synchronously.
    pub fn profile(&self) -> ProfilePrefs {
        self.profile.lock().unwrap().clone()
    }

    fn check_save(&self) -> Result<(), PreferencesError> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(PreferencesError::SaveFailed("Mock save failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferences {
    async fn load_session(&self) -> Result<SessionPrefs, PreferencesError> {
        Ok(self.session())
    }

    async fn save_session(&self, prefs: &SessionPrefs) -> Result<(), PreferencesError> {
        self.check_save()?;
        *self.session.lock().unwrap() = prefs.clone();
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), PreferencesError> {
        *self.session.lock().unwrap() = SessionPrefs::default();
        Ok(())
    }

    async fn load_profile(&self) -> Result<ProfilePrefs, PreferencesError> {
        Ok(self.profile())
    }

    async fn save_profile(&self, prefs: &ProfilePrefs) -> Result<(), PreferencesError> {
        self.check_save()?;
        *self.profile.lock().unwrap() = prefs.clone();
        Ok(())
    }
}
