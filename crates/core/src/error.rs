//! Error types shared across the client core.

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a core operation.
///
/// The gateway never recovers errors: a non-success response is carried
/// upward as the server's raw body text in [`ApiError::Api`], because the
/// service returns no structured error codes and callers pattern-match the
/// message (see [`crate::classify`]).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connectivity or protocol-level failure before a response was read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; `message` is the raw body text, or
    /// `HTTP <status>` when the body was empty.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Session store I/O failure.
    #[error("session store: {0}")]
    Store(#[from] std::io::Error),

    /// The configured API base URL could not be parsed.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status of a server-reported failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
