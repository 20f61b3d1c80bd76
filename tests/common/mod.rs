//! Common test utilities for integration tests.
//!
//! Fixtures for the JSON the backend returns, and helpers that wire an
//! [`AppState`] to a wiremock server.

#![allow(dead_code)]

use coffeu::adapters::{FilePreferences, InMemoryPreferences, ReqwestHttpClient};
use coffeu::api::ApiClient;
use coffeu::state::AppState;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::MockServer;

/// Auth response as returned by login, registration and activation.
pub fn auth_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": format!("token-for-{}", username),
        "refresh_token": "refresh-token",
        "user": {
            "id": 42,
            "nombre_usuario": username,
            "email": format!("{}@example.com", username),
            "telefono_celular": "5551234567"
        }
    })
}

/// One catalog entry in the server's camelCase shape.
pub fn kitchen_body(id: i64, name: &str, price: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "stock": 20,
        "imageUrl": format!("https://img.test/{}.png", id),
        "price": price,
        "rating": 4.6,
        "reviewCount": 87,
        "deliveryTime": "30 min",
        "distance": "2.1 km",
        "discount": "15%"
    })
}

pub fn catalog_body() -> serde_json::Value {
    serde_json::json!([
        kitchen_body(1, "Taco Hub", "8.50"),
        kitchen_body(2, "Pasta Place", "12.00"),
        kitchen_body(3, "Sushi Bar", "15.25"),
    ])
}

pub fn http_client() -> ReqwestHttpClient {
    ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap()
}

/// Base URL of the mock server with the trailing slash the app uses.
pub fn base_url(server: &MockServer) -> String {
    format!("{}/", server.uri())
}

/// State wired to the mock server and in-memory preferences.
pub fn memory_state(
    server: &MockServer,
) -> (AppState<ReqwestHttpClient, InMemoryPreferences>, InMemoryPreferences) {
    let prefs = InMemoryPreferences::new();
    let api = ApiClient::new(http_client(), &base_url(server));
    (AppState::new(api, prefs.clone()), prefs)
}

/// State wired to the mock server and a file store in a temp directory.
pub fn file_state(server: &MockServer, dir: &TempDir) -> AppState<ReqwestHttpClient, FilePreferences> {
    let api = ApiClient::new(http_client(), &base_url(server));
    AppState::new(api, FilePreferences::with_dir(dir.path().to_path_buf()))
}
