//! The authenticated session: login, registration, logout, and the
//! current account.

use tracing::info;

use claritycall_api::auth::RegisterRequest;
use claritycall_api::ApiClient;
use claritycall_shared::types::SessionUser;

use crate::error::Result;

/// Wraps the shared [`ApiClient`] (which carries the session cookie) and
/// the account it currently belongs to.
#[derive(Debug)]
pub struct Session {
    api: ApiClient,
    user: Option<SessionUser>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self { api, user: None }
    }

    /// The shared client, for building stores that ride this session.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The signed-in account, if any.
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Sign in; the cookie jar picks up the session cookie.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&SessionUser> {
        let user = self.api.login(email, password).await?;
        info!(user = %user.id, "Signed in");
        Ok(&*self.user.insert(user))
    }

    /// Create an account and sign in.
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<&SessionUser> {
        let user = self.api.register(request).await?;
        info!(user = %user.id, "Registered");
        Ok(&*self.user.insert(user))
    }

    /// Restore the account behind an existing session cookie.
    pub async fn load(&mut self) -> Result<&SessionUser> {
        let user = self.api.current_user().await?;
        Ok(&*self.user.insert(user))
    }

    /// Sign out. The local account is cleared even if the server call
    /// fails; the cookie may outlive us but the client forgets it.
    pub async fn logout(&mut self) -> Result<()> {
        let result = self.api.logout().await;
        self.user = None;
        result.map_err(Into::into)
    }
}
