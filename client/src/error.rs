use recaptcha_types::ErrorKind;
use thiserror::Error;

/// Failure to obtain a well-formed reply from the verification service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("verification request timed out: {0}")]
    Timeout(String),

    #[error("verification server unreachable: {0}")]
    Unreachable(String),

    #[error("verification server returned HTTP status {0}")]
    HttpStatus(u16),

    #[error("invalid response body from verification server: {0}")]
    InvalidBody(String),

    #[error("verification request failed: {0}")]
    RequestFailed(String),

    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// Every client error is a connection failure as far as callers are concerned.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ConnectionFailure
    }

    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout(e.to_string())
        } else if e.is_connect() {
            ClientError::Unreachable(e.to_string())
        } else {
            ClientError::RequestFailed(e.to_string())
        }
    }
}
