//! API endpoint configuration loaded from environment variables.
//!
//! Defaults target a local development backend so the client starts with
//! zero configuration.

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    /// Env: `CLARITYCALL_API_URL`
    /// Default: `http://localhost:5001`
    pub base_url: String,

    /// Per-request timeout in seconds.
    /// Env: `CLARITYCALL_API_TIMEOUT_SECS`
    /// Default: `30`
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CLARITYCALL_API_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                tracing::warn!("CLARITYCALL_API_URL is empty, using default");
            } else {
                config.base_url = trimmed.to_string();
            }
        }

        if let Ok(val) = std::env::var("CLARITYCALL_API_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(n) if n > 0 => config.timeout_secs = n,
                _ => {
                    tracing::warn!(
                        value = %val,
                        "Invalid CLARITYCALL_API_TIMEOUT_SECS, using default"
                    );
                }
            }
        }

        config
    }

    /// Configuration pointing at an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}
