//! Client error handling
//!
//! Every failure the component can hit collapses into "the request failed".
//! The variants only exist so logs say which way it failed.

use reqwest::StatusCode;
use thiserror::Error;
use weight_logs_shared::FormError;

/// Error raised by the weight log API and component
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid form input: {0}")]
    Form(#[from] FormError),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status for failures the service answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(err) => err.status(),
            _ => None,
        }
    }

    /// True when nothing was sent because the form was rejected locally
    pub fn is_form_error(&self) -> bool {
        matches!(self, ClientError::Form(_))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
