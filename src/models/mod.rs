//! Data records shared by the API client and the state holder.

pub mod cart;
pub mod favorites;
pub mod kitchen;
pub mod user;

pub use cart::{Cart, CartLine};
pub use favorites::Favorites;
pub use kitchen::{parse_price, Kitchen, KitchenId, Product};
pub use user::{AuthResponse, Session, User};
