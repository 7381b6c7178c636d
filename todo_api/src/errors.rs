//! Error types for the API client.

use crate::session::SessionError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered 401. The session token has already been cleared.
    #[error("Unauthorized")]
    Unauthorized,
    /// The API returned a non-success status. `message` is already normalized
    /// into user-facing copy.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    /// Base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A caller-supplied header name or value was rejected.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// The session could not persist a token change. The in-memory token
    /// already reflects the change.
    #[error("Failed to persist session: {0}")]
    Session(#[source] SessionError),
    /// A success response could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Returns the HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
