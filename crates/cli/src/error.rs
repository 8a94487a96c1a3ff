//! CLI error type and user-facing rendering.

use onepay::{ApiError, classify};

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0}")]
    Context(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The sentence shown to the user. Remote failures render as the
    /// classifier's localized message; the raw text stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Api(err) => classify(err).message,
            CliError::Context(message) => message.clone(),
            CliError::Io(err) => err.to_string(),
        }
    }
}
