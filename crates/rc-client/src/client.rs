//! Low-level JSON client for the admin API.

use std::time::Duration;

use rc_common::{ProviderError, Result};
use rc_config::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Thin JSON client shared by the provider implementations.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|error| ProviderError::transport(error.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|error| ProviderError::transport(error.to_string()))?;
        Self::decode(response).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|error| ProviderError::transport(error.to_string()))?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|error| ProviderError::transport(error.to_string()))?;
        Self::check(response).await.map(drop)
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let response = self
            .http
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|error| ProviderError::transport(error.to_string()))?;
        Self::check(response).await.map(drop)
    }

    /// POST that also decodes the response body.
    pub async fn post_for_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|error| ProviderError::transport(error.to_string()))?;
        Self::decode(response).await
    }

    /// Reject non-success statuses, carrying along the error body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::rejected(status.as_u16(), message))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|error| ProviderError::decode(error.to_string()))
    }
}
