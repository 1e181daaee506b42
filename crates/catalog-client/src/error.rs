//! Catalog client error types.

use thiserror::Error;

/// Errors raised while talking to the upstream catalog.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The outbound request could not be sent.
    #[error("request failed: {0}")]
    Transport(String),

    /// Upstream answered with an unexpected status.
    #[error("upstream returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Upstream has no product with this id.
    #[error("product {0} not found upstream")]
    NotFound(u64),

    /// The response body could not be decoded.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
