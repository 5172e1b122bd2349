//! Error types for model listing.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while authenticating, listing, or printing models.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote service rejected the credential.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The credential is malformed and was rejected before any request.
    #[error("invalid API key format")]
    InvalidApiKey,

    /// The request could not be completed (network, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("remote service error ({status}): {message}")]
    RemoteService { status: u16, message: String },

    /// No credential was found in the keyring or environment.
    #[error("credentials not found for provider: {0}")]
    CredentialsNotFound(String),

    /// Failed to access system keyring.
    #[error("keyring error: {0}")]
    Keyring(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the credential was rejected or unusable.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::InvalidApiKey)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
