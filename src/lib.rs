//! coffeu: client core for a food-ordering app.
//!
//! The [`state::AppState`] holder owns the session, catalog, cart and
//! favorites, and talks to the backend through [`api::ApiClient`]. The
//! network and the device preferences sit behind the traits in [`traits`],
//! with production and mock implementations in [`adapters`].

pub mod adapters;
pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod prefs;
pub mod startup;
pub mod state;
pub mod traits;
