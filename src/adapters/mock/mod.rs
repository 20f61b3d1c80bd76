//! Test doubles for the trait abstractions.
//!
//! - [`MockHttpClient`] - Configurable HTTP responses with request recording
//! - [`InMemoryPreferences`] - In-memory preference store

mod http;
mod preferences;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use preferences::InMemoryPreferences;
