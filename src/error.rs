//! Client Error Types

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong while handling a user action
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// User input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
