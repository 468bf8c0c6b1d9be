//! Nullable verifier: canned replies without touching the network.

use crate::error::ClientError;
use crate::SiteVerify;

use recaptcha_types::{VerificationRequest, VerificationResponse};
use std::sync::Mutex;

/// A deterministic [`SiteVerify`] for testing.
///
/// Answers every call with the same configured reply and records the requests
/// it was asked to verify.
pub struct NullVerifier {
    reply: Result<VerificationResponse, ClientError>,
    requests: Mutex<Vec<VerificationRequest>>,
}

impl NullVerifier {
    /// Always answer with `response`.
    pub fn replying(response: VerificationResponse) -> Self {
        Self {
            reply: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `error`.
    pub fn failing(error: ClientError) -> Self {
        Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of verifications performed so far.
    pub fn calls(&self) -> usize {
        self.recorded().len()
    }

    /// Tokens seen so far, in call order.
    pub fn tokens(&self) -> Vec<String> {
        self.recorded().into_iter().map(|r| r.token).collect()
    }

    /// All requests seen so far (for assertions).
    pub fn recorded(&self) -> Vec<VerificationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SiteVerify for NullVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, ClientError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());
        self.reply.clone()
    }
}
