//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::prefs::PREFS_DIR;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "COFFEU_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COFFEU_TIMEOUT_SECS";
/// Environment variable overriding the preferences directory.
pub const ENV_PREFS_DIR: &str = "COFFEU_PREFS_DIR";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for building the state holder.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use coffeu::startup::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://localhost:3000/")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API base URL (default: the emulator's view of the host)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Preferences directory; `None` means `~/.coffeu`
    pub prefs_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            prefs_dir: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_prefs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prefs_dir = Some(dir.into());
        self
    }

    /// Create config from the `COFFEU_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup. Blank or unparseable values are
    /// ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = value(ENV_API_URL) {
            config = config.with_base_url(url.trim());
        }
        if let Some(secs) = value(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => tracing::warn!(value = %secs, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
        if let Some(dir) = value(ENV_PREFS_DIR) {
            config = config.with_prefs_dir(dir.trim());
        }
        config
    }

    /// The preferences directory to use, if one can be determined.
    pub fn resolved_prefs_dir(&self) -> Option<PathBuf> {
        self.prefs_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(PREFS_DIR)))
    }
}
