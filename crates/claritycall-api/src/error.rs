use thiserror::Error;

/// Errors produced by the API transport.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// Required input was missing or blank; no request was issued.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ApiError {
    /// Whether this failure was caught before any network call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// HTTP status code, when the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
