//! Failure taxonomy shared by the verifier and the decision policy.

use serde::{Deserialize, Serialize};

/// Kind of a failed verification.
///
/// `ConnectionFailure` is produced only by the verifier; every other kind comes
/// from the decision policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Network, timeout, HTTP status or body decoding failure.
    ConnectionFailure,
    /// The service rejected the site secret.
    InvalidSecret,
    /// Token invalid, already used, or expired.
    Expired,
    /// The service broke its reply contract (e.g. failure without error codes).
    MalformedResponse,
    /// Token was issued for a different action.
    ActionMismatch,
    /// Score below the configured threshold.
    ScoreTooLow,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::ConnectionFailure,
        ErrorKind::InvalidSecret,
        ErrorKind::Expired,
        ErrorKind::MalformedResponse,
        ErrorKind::ActionMismatch,
        ErrorKind::ScoreTooLow,
    ];

    /// Stable machine-readable code for form layers and logs.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::ConnectionFailure => "connection_failed",
            ErrorKind::InvalidSecret => "invalid_secret",
            ErrorKind::Expired => "expired",
            ErrorKind::MalformedResponse => "invalid_response",
            ErrorKind::ActionMismatch => "action",
            ErrorKind::ScoreTooLow => "score",
        }
    }

    /// Whether retrying can succeed. Both cases need a fresh token from the client.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::ConnectionFailure | ErrorKind::Expired)
    }

    /// Default English message suitable for end users.
    pub fn user_message(self) -> &'static str {
        match self {
            // A bad secret is a server misconfiguration; users see the generic message.
            ErrorKind::ConnectionFailure | ErrorKind::InvalidSecret => {
                "Connection to reCAPTCHA server failed"
            }
            ErrorKind::Expired => "reCAPTCHA invalid or expired, try again",
            ErrorKind::MalformedResponse => "reCAPTCHA response not valid, try again",
            ErrorKind::ActionMismatch => "Unexpected reCAPTCHA action",
            ErrorKind::ScoreTooLow => "reCAPTCHA score is too low",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
