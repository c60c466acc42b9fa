//! HTTP client for the contactbox API.

pub mod contacts;
pub mod uploads;

use contactbox_core::contact::ErrorResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the contactbox API.
#[derive(Debug, Clone)]
pub struct ContactboxClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContactboxClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    ///
    /// Error bodies are `{"error": "..."}`; anything else is passed through as text.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let path = response.url().path().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        if status.as_u16() == 404 {
            Err(ClientError::NotFound { resource: path })
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
