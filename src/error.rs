//! Error types for the translation status client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the client
///
/// These errors never escape [`Poller::poll_status`](crate::poller::Poller::poll_status);
/// they surface from construction, configuration and the simulated server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Status endpoint answered with a non-success code
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Response body had no string `result` field
    #[error("Response is missing the `result` field")]
    MissingResult,

    /// Invalid configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Socket errors from the simulated job server
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Creates an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ClientError::InvalidConfig(message.into())
    }
}
