//! Error types for the remote boundary.

use thiserror::Error;

/// Failures of a best-effort remote operation.
///
/// None of these are ever surfaced to the user; callers log and keep the
/// data they already had.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure (connect, timeout, body read, JSON decode).
    #[error("request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The payload parsed as JSON but not into the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        RemoteError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(e: serde_json::Error) -> Self {
        RemoteError::Payload(e.to_string())
    }
}
