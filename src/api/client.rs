//! Client for the coffeu backend API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::types::{AddProductRequest, LoginRequest, RegisterRequest, VerifyCodeRequest};
use crate::models::{AuthResponse, Kitchen, KitchenId, Product};
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL (the host machine as seen from the Android emulator).
pub const DEFAULT_BASE_URL: &str = "http://10.0.2.2:3000/";

/// Typed access to the remote API over any [`HttpClient`].
pub struct ApiClient<C: HttpClient> {
    /// Base URL, stored without a trailing slash
    base_url: String,
    http: C,
    /// Optional token for Bearer auth
    auth_token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            auth_token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set or clear the token sent as `Authorization: Bearer`.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(ref token) = self.auth_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url, &self.headers()).await?;
        decode(response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let body = serde_json::to_string(body)?;
        let mut headers = self.headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = self.http.post(&url, &body, &headers).await?;
        decode(response)
    }

    /// POST accounts/login/
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("accounts/login/", request).await
    }

    /// POST accounts/registro/
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("accounts/registro/", request).await
    }

    /// POST accounts/activar/
    pub async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("accounts/activar/", request).await
    }

    /// GET products/
    pub async fn list_kitchens(&self) -> Result<Vec<Kitchen>, ApiError> {
        self.get_json("products/").await
    }

    /// GET products/{id}/
    pub async fn get_product(&self, id: KitchenId) -> Result<Product, ApiError> {
        self.get_json(&format!("products/{}/", id)).await
    }

    /// POST products/
    pub async fn add_product(&self, request: &AddProductRequest) -> Result<Kitchen, ApiError> {
        self.post_json("products/", request).await
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.is_success() {
        let body = response.text_lossy();
        return Err(ApiError::Status {
            status: response.status,
            body: body.chars().take(200).collect(),
        });
    }
    Ok(response.json()?)
}
