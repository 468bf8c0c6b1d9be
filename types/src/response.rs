//! Parsed siteverify reply.

use serde::{Deserialize, Serialize};

/// Error code reported when the request carried no secret.
pub const MISSING_INPUT_SECRET: &str = "missing-input-secret";

/// Error code reported when the secret is unknown or malformed.
pub const INVALID_INPUT_SECRET: &str = "invalid-input-secret";

/// JSON body returned by the verification service.
///
/// Field names follow the service's own contract (`error-codes` keeps its dash).
/// A successful reply carries `score` and `action`; a failed one carries
/// `error-codes`. Neither is enforced here: the decision policy reports a reply
/// that breaks this contract as malformed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(rename = "error-codes", default, skip_serializing_if = "Vec::is_empty")]
    pub error_codes: Vec<String>,
    /// Hostname of the site where the challenge was solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// ISO-8601 timestamp of the challenge load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_ts: Option<String>,
}

impl VerificationResponse {
    /// A successful reply with the given score and action.
    pub fn passed(score: f64, action: impl Into<String>) -> Self {
        Self {
            success: true,
            score: Some(score),
            action: Some(action.into()),
            error_codes: Vec::new(),
            hostname: None,
            challenge_ts: None,
        }
    }

    /// A failed reply carrying the given error codes.
    pub fn failed<I, S>(error_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            success: false,
            score: None,
            action: None,
            error_codes: error_codes.into_iter().map(Into::into).collect(),
            hostname: None,
            challenge_ts: None,
        }
    }

    /// Whether the service rejected the site secret itself.
    pub fn reports_bad_secret(&self) -> bool {
        self.error_codes
            .iter()
            .any(|c| c == MISSING_INPUT_SECRET || c == INVALID_INPUT_SECRET)
    }
}
