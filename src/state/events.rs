//! State change notifications.
//!
//! The state holder broadcasts a [`StateEvent`] after every observable
//! change. Consumers subscribe and re-read whatever they display.

use tokio::sync::broadcast;

use crate::models::KitchenId;

/// Default capacity of the state event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Type alias for the state event sender.
pub type StateEventSender = broadcast::Sender<StateEvent>;

/// Create a new state event channel with the specified capacity.
pub fn create_event_channel(
    capacity: usize,
) -> (StateEventSender, broadcast::Receiver<StateEvent>) {
    broadcast::channel(capacity)
}

/// Something observable changed in the state holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// A request started or finished
    LoadingChanged(bool),
    /// Login succeeded
    LoggedIn { username: String },
    /// Session, cart and favorites were cleared
    LoggedOut,
    /// Registration was accepted
    Registered,
    /// The activation code was accepted
    CodeVerified,
    /// The catalog was fetched
    CatalogLoaded { count: usize },
    /// A product detail was fetched
    ProductLoaded { id: KitchenId },
    /// A new product was saved on the server
    ProductAdded { id: KitchenId },
    /// A cart line was added, changed or removed
    CartChanged { id: KitchenId, quantity: u32 },
    /// A kitchen entered or left the favorites
    FavoriteToggled { id: KitchenId, favorite: bool },
    /// The error message was set or cleared
    ErrorChanged(Option<String>),
}

impl StateEvent {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            StateEvent::LoadingChanged(_) => "loading_changed",
            StateEvent::LoggedIn { .. } => "logged_in",
            StateEvent::LoggedOut => "logged_out",
            StateEvent::Registered => "registered",
            StateEvent::CodeVerified => "code_verified",
            StateEvent::CatalogLoaded { .. } => "catalog_loaded",
            StateEvent::ProductLoaded { .. } => "product_loaded",
            StateEvent::ProductAdded { .. } => "product_added",
            StateEvent::CartChanged { .. } => "cart_changed",
            StateEvent::FavoriteToggled { .. } => "favorite_toggled",
            StateEvent::ErrorChanged(_) => "error_changed",
        }
    }
}
