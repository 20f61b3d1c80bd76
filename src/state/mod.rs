//! Application state management
//!
//! - [`AppState`]: session, catalog, cart and favorites, plus the
//!   operations that change them
//! - [`StateEvent`]: change notifications broadcast to subscribers
//! - [`ProductForm`]: the add-product form and its checks

pub mod app_state;
pub mod events;
pub mod forms;

pub use app_state::AppState;
pub use events::{create_event_channel, StateEvent, StateEventSender, EVENT_CHANNEL_CAPACITY};
pub use forms::ProductForm;
