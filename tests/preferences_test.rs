//! Tests for the file-backed preference store.

use coffeu::adapters::FilePreferences;
use coffeu::prefs::{
    NotificationSettings, ProfilePrefs, SessionPrefs, PROFILE_PREFS_FILE, SESSION_PREFS_FILE,
};
use coffeu::traits::PreferenceStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_directory_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().join("nested"));

    assert_eq!(store.load_session().await.unwrap(), SessionPrefs::default());
    assert_eq!(store.load_profile().await.unwrap(), ProfilePrefs::default());
    // Clearing something that was never saved is fine
    store.clear_session().await.unwrap();
}

#[tokio::test]
async fn test_session_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    store
        .save_session(&SessionPrefs::logged_in("maria"))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join(SESSION_PREFS_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["is_logged_in"], true);
    assert_eq!(json["username"], "maria");
}

#[tokio::test]
async fn test_profile_roundtrip_keeps_notification_toggles() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    let profile = ProfilePrefs {
        full_name: Some("María López".to_string()),
        email: Some("maria@example.com".to_string()),
        phone_number: Some("5551234567".to_string()),
        date_of_birth: Some("1990-04-12".to_string()),
        image_uri: Some("file:///photos/me.jpg".to_string()),
        notification_settings: NotificationSettings {
            sound: true,
            app_updates: false,
            ..NotificationSettings::default()
        },
    };
    store.save_profile(&profile).await.unwrap();

    // A new store over the same directory sees the same data
    let reopened = FilePreferences::with_dir(temp_dir.path().to_path_buf());
    assert_eq!(reopened.load_profile().await.unwrap(), profile);
    assert!(temp_dir.path().join(PROFILE_PREFS_FILE).exists());
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(SESSION_PREFS_FILE), "{not json").unwrap();
    std::fs::write(temp_dir.path().join(PROFILE_PREFS_FILE), "42").unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    assert_eq!(store.load_session().await.unwrap(), SessionPrefs::default());
    assert_eq!(store.load_profile().await.unwrap(), ProfilePrefs::default());
}
