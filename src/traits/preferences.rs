//! Preference store trait abstraction.
//!
//! The app keeps two small key-value stores on the device: the session
//! flags used for "remember me" and the profile edits made on the profile
//! screen. This trait hides where they live so the state holder can be
//! tested against an in-memory store.

use async_trait::async_trait;

use crate::prefs::{ProfilePrefs, SessionPrefs};

/// Preference operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferencesError {
    /// Failed to write a preference file
    SaveFailed(String),
    /// Failed to remove a preference file
    ClearFailed(String),
    /// No preference directory could be determined
    NoPreferencesDir,
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::SaveFailed(msg) => write!(f, "Failed to save preferences: {}", msg),
            PreferencesError::ClearFailed(msg) => {
                write!(f, "Failed to clear preferences: {}", msg)
            }
            PreferencesError::NoPreferencesDir => {
                write!(f, "Could not determine the preferences directory")
            }
        }
    }
}

impl std::error::Error for PreferencesError {}

/// Trait for the device-local preference stores.
///
/// Loading never fails just because nothing was saved yet: a missing store
/// yields the default value.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Load the session flags.
    async fn load_session(&self) -> Result<SessionPrefs, PreferencesError>;

    /// Persist the session flags.
    async fn save_session(&self, prefs: &SessionPrefs) -> Result<(), PreferencesError>;

    /// Forget the session flags.
    async fn clear_session(&self) -> Result<(), PreferencesError>;

    /// Load the profile store.
    async fn load_profile(&self) -> Result<ProfilePrefs, PreferencesError>;

    /// Persist the profile store.
    async fn save_profile(&self, prefs: &ProfilePrefs) -> Result<(), PreferencesError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_error_display() {
        assert_eq!(
            PreferencesError::SaveFailed("disk full".to_string()).to_string(),
            "Failed to save preferences: disk full"
        );
        assert_eq!(
            PreferencesError::ClearFailed("denied".to_string()).to_string(),
            "Failed to clear preferences: denied"
        );
        assert_eq!(
            PreferencesError::NoPreferencesDir.to_string(),
            "Could not determine the preferences directory"
        );
    }

    #[test]
    fn test_preferences_error_implements_error_trait() {
        let err = PreferencesError::NoPreferencesDir;
        let _: &dyn std::error::Error = &err;
    }
}
