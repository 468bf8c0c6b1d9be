//! The verification pipeline: siteverify call followed by the decision policy.

use recaptcha_client::{SiteVerifier, SiteVerify};
use recaptcha_policy::decide;
use recaptcha_types::{Outcome, Policy, Secret, VerificationRequest};

use crate::config::GuardConfig;
use crate::error::{GuardError, VerificationError};

/// Score reported for every token while verification is disabled.
pub const BYPASS_SCORE: f64 = 1.0;

/// Verifies client tokens against the configured service and policy.
///
/// Generic over the [`SiteVerify`] implementation so tests can drive it with a
/// `NullVerifier`; production code uses the default [`SiteVerifier`].
pub struct RecaptchaGuard<V = SiteVerifier> {
    verifier: V,
    secret: Secret,
    default_score_threshold: Option<f64>,
    bypass: bool,
}

impl RecaptchaGuard<SiteVerifier> {
    /// Build a guard talking to the endpoint named in `config`.
    pub fn from_config(config: GuardConfig) -> Result<Self, GuardError> {
        config.validate()?;
        let verifier = SiteVerifier::with_config(config.verifier_config())?;
        Self::with_verifier(verifier, config)
    }
}

impl<V: SiteVerify> RecaptchaGuard<V> {
    /// Build a guard around an existing verifier.
    pub fn with_verifier(verifier: V, config: GuardConfig) -> Result<Self, GuardError> {
        config.validate()?;
        if config.disable_verification {
            tracing::warn!("reCAPTCHA verification is DISABLED; every token will be accepted");
        }
        Ok(Self {
            verifier,
            secret: config.secret,
            default_score_threshold: config.default_score_threshold,
            bypass: config.disable_verification,
        })
    }

    /// A per-call policy seeded with the configured default threshold.
    pub fn policy(&self) -> Policy {
        Policy {
            score_threshold: self.default_score_threshold,
            ..Policy::default()
        }
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypass
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Verify one client token under `policy`.
    ///
    /// Returns the token unchanged (or the score, if `policy.return_score`) when
    /// it is accepted. Every failure is terminal for this attempt; retrying is
    /// up to the caller and needs a fresh token.
    pub async fn verify(&self, token: &str, policy: &Policy) -> Result<Outcome, VerificationError> {
        if self.bypass {
            tracing::debug!("verification disabled, accepting token unchecked");
            return Ok(Outcome::accepted(token, BYPASS_SCORE, policy.return_score));
        }

        let request = VerificationRequest::new(self.secret.clone(), token);
        let response = self.verifier.verify(&request).await?;
        let outcome = decide(&response, policy, token).map_err(|rejection| {
            tracing::info!(code = rejection.kind().code(), %rejection, "token rejected");
            rejection
        })?;
        Ok(outcome)
    }
}

impl<V> std::fmt::Debug for RecaptchaGuard<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecaptchaGuard")
            .field("secret", &self.secret)
            .field("default_score_threshold", &self.default_score_threshold)
            .field("bypass", &self.bypass)
            .finish_non_exhaustive()
    }
}
