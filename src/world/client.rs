//! EVE Frontier world API client.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::WorldConfig;

/// Errors from the world API.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Endpoint name is not a lowercase slug.
    #[error("invalid endpoint name: {0}")]
    InvalidEndpoint(String),

    #[error("world API request failed: {0}")]
    Request(String),

    #[error("world API {0}")]
    Status(u16),

    #[error("world API returned invalid JSON: {0}")]
    Decode(String),
}

/// Read-only client for the world API gateway.
#[derive(Debug, Clone)]
pub struct WorldClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorldClient {
    pub fn new(config: &WorldConfig) -> Result<Self, WorldError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WorldError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one named dataset.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value, WorldError> {
        let path =
            endpoint_path(endpoint).ok_or_else(|| WorldError::InvalidEndpoint(endpoint.to_string()))?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| WorldError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorldError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WorldError::Decode(e.to_string()))
    }
}

/// Request path for an endpoint name, or `None` if the name is not a slug.
pub fn endpoint_path(endpoint: &str) -> Option<String> {
    match endpoint {
        "types" => Some("/api/types?limit=20".to_string()),
        "killmails" => Some("/api/killmails?limit=10".to_string()),
        "smart-assemblies" => Some("/api/smart-assemblies?limit=10".to_string()),
        other if is_slug(other) => Some(format!("/api/{}", other)),
        _ => None,
    }
}

fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 64
        && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
