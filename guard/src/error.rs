use recaptcha_client::ClientError;
use recaptcha_policy::Rejection;
use recaptcha_types::ErrorKind;
use thiserror::Error;

/// Failure to build a guard or to set up its surroundings.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("config error: {0}")]
    Config(String),

    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("logging error: {0}")]
    Logging(String),
}

/// Terminal result of a failed verification attempt.
///
/// `ConnectionFailure` only ever comes from the siteverify client; every other
/// kind is a [`Rejection`] raised by the decision policy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VerificationError {
    #[error("connection to reCAPTCHA server failed: {0}")]
    ConnectionFailure(#[from] ClientError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

impl VerificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VerificationError::ConnectionFailure(e) => e.kind(),
            VerificationError::Rejected(r) => r.kind(),
        }
    }

    /// Stable machine-readable code, see [`ErrorKind::code`].
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    /// Default English message for end users. Never reveals secret problems.
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}
