//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`PreferenceStore`] - Device-local session and profile preferences

pub mod http;
pub mod preferences;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::{PreferenceStore, PreferencesError};
