//! Authenticated user and session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user object embedded in auth responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre_usuario")]
    pub username: String,
    pub email: String,
    #[serde(rename = "telefono_celular")]
    pub phone: String,
}

/// Response body of the login, registration and activation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(rename = "access_token")]
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// The logged-in session held by the state manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Self {
            token: response.token,
            refresh_token: response.refresh_token,
            user: response.user,
            logged_in_at: Utc::now(),
        }
    }
}
