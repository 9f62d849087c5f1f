//! Error types for sn-catalog

use thiserror::Error;

/// Errors raised by transports, auth and the catalog adapters
///
/// Adapters never hand these to their callers directly; they are folded
/// into a failed [`crate::types::OperationOutcome`].
#[derive(Error, Debug)]
pub enum Error {
    /// Connectivity, timeout or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The instance answered with a non-2xx status
    #[error("ServiceNow API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message taken from the response body
        message: String,
    },

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed instance URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The submission response lacks the identifier needed to resolve it
    #[error("cannot resolve submitted record: {0}")]
    Resolution(String),

    /// A single-entity lookup returned nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing or rejected credentials
    #[error("authentication error: {0}")]
    Auth(String),

    /// Missing or malformed configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Required input field missing or empty
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Whether the error came from the transport (status or connectivity)
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}

/// Result type alias for sn-catalog
pub type Result<T> = std::result::Result<T, Error>;
