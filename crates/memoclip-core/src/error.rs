//! Error types for memoclip.
//!
//! Two classes of failure exist. [`Error`] covers the best-effort stages
//! (tag fetch, tag proposal): callers log it and substitute an empty default.
//! [`SubmissionError`] covers memo creation, which is always surfaced.

use thiserror::Error;

/// Result type alias using memoclip's soft-stage Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by a best-effort stage.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Remote service answered with a non-success status
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Serialization(e.to_string())
        } else {
            Error::Request(e.to_string())
        }
    }
}

/// Failure to create the memo.
///
/// The display string of each variant is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The Memos server answered with a non-success status.
    #[error("API Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The request went out but no response came back.
    #[error("Network error: Cannot reach Memos server")]
    Network { detail: String },

    /// The request could not be built or sent.
    #[error("Request failed: {0}")]
    Request(String),
}

impl SubmissionError {
    /// Short machine-readable name of the failure kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Api { .. } => "api",
            Self::Network { .. } => "network",
            Self::Request(_) => "request",
        }
    }
}
