//! Error types for clubhouse-core

use thiserror::Error;

/// Result type alias using clubhouse-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clubhouse-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx response or network failure.
    ///
    /// Displays as the bare message so it can be surfaced to the operator as-is.
    #[error("{message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    Decode(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn request(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by a transport error, if the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Request {
            status: error.status().map(|status| status.as_u16()),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_displays_bare_message() {
        let error = Error::request(Some(500), "locked");
        assert_eq!(error.to_string(), "locked");
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn decode_error_has_no_status() {
        assert_eq!(Error::Decode("tags".to_string()).status(), None);
    }
}
