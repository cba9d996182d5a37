//! Error types for the orphanage client.
//!
//! Every API call returns [`ClientError`] so views can decide how to surface a
//! failure. Variants carry owned strings rather than the transport's error
//! types: they are stored in signals and rendered, so they must be `Clone`.

pub mod config;

use thiserror::Error;

pub use config::ConfigError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (no connectivity, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The API answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response body: {0}")]
    Parse(String),
    /// The request could not be assembled, such as a file part with an
    /// invalid MIME type.
    #[error("Failed to build request: {0}")]
    Build(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
