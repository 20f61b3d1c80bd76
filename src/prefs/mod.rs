//! Device-local preferences.
//!
//! Two JSON stores live under the preferences directory (`~/.coffeu/` by
//! default):
//!
//! - `user_session_prefs.json` - the "remember me" flags written after a
//!   successful login and cleared on logout
//! - `user_profile_prefs.json` - profile edits and notification toggles

mod manager;

pub use manager::{PreferencesManager, PREFS_DIR, PROFILE_PREFS_FILE, SESSION_PREFS_FILE};

use serde::{Deserialize, Serialize};

/// Session flags that survive an app restart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionPrefs {
    /// Whether the user was logged in when the app last ran.
    #[serde(default)]
    pub is_logged_in: bool,
    /// Display name of the logged-in user.
    #[serde(default)]
    pub username: Option<String>,
}

impl SessionPrefs {
    /// Flags for a user that just logged in.
    pub fn logged_in(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: Some(username.into()),
        }
    }

    /// The remembered username, only when the login flag is set.
    pub fn remembered_user(&self) -> Option<&str> {
        if self.is_logged_in {
            self.username.as_deref().filter(|name| !name.is_empty())
        } else {
            None
        }
    }
}

/// Notification toggles from the notification settings screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub notifications: bool,
    pub sound: bool,
    pub vibrate: bool,
    pub special_offers: bool,
    pub payments: bool,
    pub cashback: bool,
    pub app_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            sound: false,
            vibrate: false,
            special_offers: true,
            payments: false,
            cashback: false,
            app_updates: true,
        }
    }
}

/// Profile edits kept on the device.
///
/// Every field is optional: the profile screen falls back to what the
/// server returned at login when a field was never edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePrefs {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Reference to the avatar picked by the user.
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub notification_settings: NotificationSettings,
}

impl ProfilePrefs {
    /// Name to greet the user with, preferring the edited full name.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
    }
}
