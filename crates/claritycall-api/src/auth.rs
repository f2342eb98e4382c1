//! Session establishment and teardown.
//!
//! The backend authenticates with a session cookie; a successful login or
//! registration sets it on this client's jar and every later call rides
//! on it.

use serde::Serialize;

use claritycall_shared::types::SessionUser;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Fields for creating an account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ApiClient {
    /// Log in with email and password. Blank fields fail validation
    /// before any request is issued.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }

        let body = LoginRequest { email, password };
        self.post_json("/api/auth/login", &body).await
    }

    /// Create an account and establish a session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionUser> {
        if request.email.trim().is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        if request.password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }
        self.post_json("/api/auth/register", request).await
    }

    /// Tear down the session on the server.
    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self
            .post_json("/api/auth/logout", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    /// The account behind the current session cookie.
    pub async fn current_user(&self) -> Result<SessionUser> {
        self.get_json("/api/auth/me").await
    }
}
