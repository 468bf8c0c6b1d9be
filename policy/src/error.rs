use recaptcha_types::ErrorKind;
use thiserror::Error;

/// Why a well-formed exchange with the verification service did not accept the token.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Rejection {
    #[error("verification service rejected the site secret: {error_codes:?}")]
    InvalidSecret { error_codes: Vec<String> },

    #[error("reCAPTCHA token invalid or expired: {error_codes:?}")]
    Expired { error_codes: Vec<String> },

    #[error("malformed verification response: {0}")]
    MalformedResponse(String),

    #[error("unexpected action: {action}")]
    ActionMismatch { action: String },

    #[error("reCAPTCHA score is too low: {score}")]
    ScoreTooLow { score: f64 },
}

impl Rejection {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Rejection::InvalidSecret { .. } => ErrorKind::InvalidSecret,
            Rejection::Expired { .. } => ErrorKind::Expired,
            Rejection::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Rejection::ActionMismatch { .. } => ErrorKind::ActionMismatch,
            Rejection::ScoreTooLow { .. } => ErrorKind::ScoreTooLow,
        }
    }

    /// Raw error codes reported by the service, if this rejection carries any.
    pub fn error_codes(&self) -> &[String] {
        match self {
            Rejection::InvalidSecret { error_codes } | Rejection::Expired { error_codes } => {
                error_codes
            }
            _ => &[],
        }
    }
}
