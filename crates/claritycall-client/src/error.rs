use claritycall_api::ApiError;
use claritycall_shared::TimeError;
use thiserror::Error;

/// Errors surfaced by the state stores.
///
/// The split matters to callers: a [`StoreError::Validation`] means no
/// request was ever issued and the form should show an inline message;
/// everything else means the action was attempted and may be retried.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Required input missing or malformed; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request was dispatched and failed (transport or server status).
    #[error(transparent)]
    Api(ApiError),
}

impl StoreError {
    /// Whether the failure was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

impl From<ApiError> for StoreError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Validation(msg) => StoreError::Validation(msg),
            other => StoreError::Api(other),
        }
    }
}

impl From<TimeError> for StoreError {
    fn from(e: TimeError) -> Self {
        StoreError::Validation(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
