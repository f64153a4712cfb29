//! Error types for fb-messenger

use thiserror::Error;

/// fb-messenger error type
#[derive(Error, Debug)]
pub enum MessengerError {
    /// Input failed a structural check; no request was made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The Graph API rejected the request with a 4xx status.
    #[error("Graph API rejected request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    /// Network-level failure or a 5xx from the Graph API.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Profile lookup for an id the Graph API does not know.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Page access token missing or empty.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for MessengerError {
    fn from(err: reqwest::Error) -> Self {
        MessengerError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for MessengerError {
    fn from(err: serde_json::Error) -> Self {
        MessengerError::Parse(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MessengerError>;
