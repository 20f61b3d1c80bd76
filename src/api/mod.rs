//! Remote API access.
//!
//! [`ApiClient`] issues the typed requests; [`ApiError`] describes how they
//! can fail. Response records live in [`crate::models`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{AddProductRequest, LoginRequest, RegisterRequest, VerifyCodeRequest};
