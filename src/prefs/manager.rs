//! File-backed storage for the preference stores.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{ProfilePrefs, SessionPrefs};

/// The preferences directory name under the home directory.
pub const PREFS_DIR: &str = ".coffeu";

/// Session flags file name.
pub const SESSION_PREFS_FILE: &str = "user_session_prefs.json";

/// Profile store file name.
pub const PROFILE_PREFS_FILE: &str = "user_profile_prefs.json";

/// Reads and writes the preference files.
#[derive(Debug, Clone)]
pub struct PreferencesManager {
    dir: PathBuf,
}

impl PreferencesManager {
    /// Create a manager rooted at `~/.coffeu`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            dir: home.join(PREFS_DIR),
        })
    }

    /// Create a manager rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the preference files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_PREFS_FILE)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_PREFS_FILE)
    }

    /// Load the session flags.
    ///
    /// A missing or unreadable file yields the defaults (logged out).
    pub fn load_session(&self) -> SessionPrefs {
        read_json_or_default(&self.session_path())
    }

    pub fn save_session(&self, prefs: &SessionPrefs) -> io::Result<()> {
        self.write_json(&self.session_path(), prefs)
    }

    /// Delete the session flags file. Succeeds if it never existed.
    pub fn clear_session(&self) -> io::Result<()> {
        match fs::remove_file(self.session_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    pub fn load_profile(&self) -> ProfilePrefs {
        read_json_or_default(&self.profile_path())
    }

    pub fn save_profile(&self, prefs: &ProfilePrefs) -> io::Result<()> {
        self.write_json(&self.profile_path(), prefs)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return T::default(),
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Ignoring unreadable preferences at {:?}: {}", path, e);
            T::default()
        }
    }
}
