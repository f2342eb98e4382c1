//! The HTTP client underlying every API call.
//!
//! Sessions are cookie based: the login call sets a cookie that the
//! jar replays on every subsequent request, so the client itself is the
//! unit of authentication. Clone is cheap and shares the jar.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Cookie-session REST client for the claritycall backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the given configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Build a client from environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env())
    }

    /// Base URL this client targets, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Resolve a file URL that may be absolute or a relative uploads path.
    pub fn resolve_file_url(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // ------------------------------------------------------------------
    // Request helpers
    // ------------------------------------------------------------------

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        Self::parse(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::parse(resp).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "PUT");
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        Self::parse(resp).await
    }

    /// PUT with no request body, for idempotent state flips like
    /// marking a notification read.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<()> {
        debug!(path, "PUT");
        let resp = self.http.put(self.url(path)).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let resp = self.http.delete(self.url(path)).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Surface a non-success status as [`ApiError::Status`], lifting the
    /// backend's `{"message": …}` body when present.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = match resp.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body),
            Err(_) => String::new(),
        };

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }
}
