//! Error types for the BotOps API client.
//!
//! # Design
//! `Status` carries the raw status code and body for any non-2xx response;
//! callers that only care about missing resources can use `is_not_found`
//! instead of matching on the code themselves. `Decode` and `Validation` are
//! kept separate because they fail at different layers: the first means the
//! body was not JSON at all, the second means the JSON did not reconstruct
//! into the expected typed record.

use thiserror::Error;

/// Errors returned by the transport and the resource façades.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP round-trip itself failed (connect, DNS, I/O).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was present but not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The response decoded to JSON that is missing required fields or has
    /// wrong types for the expected record.
    #[error("unexpected response shape: {0}")]
    Validation(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ApiError {
    /// True if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// True if the server answered with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status >= 500)
    }
}
