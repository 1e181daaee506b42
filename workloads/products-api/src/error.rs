//! API error taxonomy.

use catalog_client::ClientError;
use thiserror::Error;

/// Errors surfaced to API callers, each with a fixed HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request itself is malformed (bad id, unreadable body).
    #[error("{0}")]
    Validation(String),

    /// The addressed resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The route exists but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Upstream failed; its status is propagated when it carried one.
    #[error("upstream request failed: {message}")]
    Upstream { status: Option<u16>, message: String },

    /// Response assembly failed on our side.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed => 405,
            Self::Upstream { status, .. } => match status {
                Some(s) if *s >= 400 => *s,
                _ => 502,
            },
            Self::Internal(_) => 500,
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => ApiError::NotFound(format!("product {} not found", id)),
            ClientError::Status { status, message } => ApiError::Upstream {
                status: Some(status),
                message,
            },
            ClientError::Transport(message) => ApiError::Upstream {
                status: None,
                message,
            },
            ClientError::Decode(message) => ApiError::Upstream {
                status: None,
                message,
            },
        }
    }
}
