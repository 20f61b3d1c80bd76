//! Request bodies sent to the remote API.
//!
//! Field names on the wire follow the server (Spanish for the account
//! endpoints, camelCase for products); the Rust names are English.

use serde::{Deserialize, Serialize};

/// Body of `POST accounts/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email or username, the server accepts either.
    #[serde(rename = "identificador")]
    pub identifier: String,
    pub password: String,
}

/// Body of `POST accounts/registro/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    #[serde(rename = "telefono_celular")]
    pub phone: String,
    pub password: String,
    /// Confirmation, checked again by the server.
    pub password2: String,
}

/// Body of `POST accounts/activar/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub otp: String,
}

/// Body of `POST products/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: String,
    pub description: String,
    pub stock: i64,
    pub image_url: String,
    pub price: String,
    pub rating: f64,
    pub review_count: i64,
    pub delivery_time: String,
    pub distance: String,
    pub discount: String,
}
