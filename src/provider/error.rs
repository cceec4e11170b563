//! # Admin Errors
//!
//! Errors raised by [`ServiceAdmin`](super::ServiceAdmin) implementations.

use thiserror::Error;

/// Failure talking to the admin endpoint
#[derive(Debug, Error)]
pub enum AdminError {
    /// The request never produced an HTTP response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with an unexpected status
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was empty or not the expected JSON document
    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client could not be built from its configuration
    #[error("invalid admin client configuration: {0}")]
    Config(String),
}

impl AdminError {
    /// Whether the error comes from an unparsable response body
    pub fn is_decode(&self) -> bool {
        matches!(self, AdminError::Decode { .. })
    }
}
