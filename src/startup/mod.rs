//! Startup wiring: configuration, adapter construction and the first-screen
//! decision.
//!
//! # Components
//!
//! - [`config`] - Client configuration and its environment overrides
//! - [`screen`] - Remember-me start screen policy
//!
//! # Usage
//!
//! ```ignore
//! use coffeu::startup::{build_state, determine_start_screen, ClientConfig};
//!
//! let mut state = build_state(&ClientConfig::from_env())?;
//! let screen = determine_start_screen(&mut state).await;
//! ```

pub mod config;
pub mod screen;

pub use config::ClientConfig;
pub use screen::StartScreen;

use thiserror::Error;

use crate::adapters::{FilePreferences, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::state::AppState;
use crate::traits::{HttpClient, HttpError, PreferenceStore, PreferencesError};

/// The state holder wired to the production adapters.
pub type CoffeuState = AppState<ReqwestHttpClient, FilePreferences>;

/// Errors raised while wiring the state holder.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] HttpError),

    #[error("{0}")]
    Preferences(#[from] PreferencesError),
}

/// Build the production state holder from `config`.
pub fn build_state(config: &ClientConfig) -> Result<CoffeuState, StartupError> {
    let http = ReqwestHttpClient::with_timeout(config.timeout)?;
    let prefs_dir = config
        .resolved_prefs_dir()
        .ok_or(PreferencesError::NoPreferencesDir)?;

    tracing::debug!(
        base_url = %config.base_url,
        prefs_dir = %prefs_dir.display(),
        timeout_secs = config.timeout.as_secs(),
        "Building client state"
    );

    let api = ApiClient::new(http, &config.base_url);
    Ok(AppState::new(api, FilePreferences::with_dir(prefs_dir)))
}

/// Read the saved session flags and pick the first screen.
pub async fn determine_start_screen<C, P>(state: &mut AppState<C, P>) -> StartScreen
where
    C: HttpClient,
    P: PreferenceStore,
{
    StartScreen::from_session(&state.restore_session().await)
}
