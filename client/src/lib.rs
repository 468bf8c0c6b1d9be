//! Siteverify client. Exchanges a token for the verification service's verdict.
//!
//! Design:
//! - One `POST` per verification, form-encoded `secret` + `response`
//! - Bounded timeout (5 seconds by default), no retries, no caching
//! - Every failure, from DNS to an undecodable body, is a [`ClientError`] and
//!   maps to the `ConnectionFailure` kind; interpreting a well-formed reply is
//!   left to the decision policy
//! - [`SiteVerify`] is the seam the pipeline is generic over, so tests can swap
//!   in [`NullVerifier`]

pub mod error;
pub mod null;
pub mod verifier;

pub use error::ClientError;
pub use null::NullVerifier;
pub use verifier::{SiteVerifier, VerifierConfig, DEFAULT_TIMEOUT, SITEVERIFY_URL};

use recaptcha_types::{VerificationRequest, VerificationResponse};
use std::future::Future;

/// Anything that can turn a [`VerificationRequest`] into a parsed reply.
///
/// Dropping the returned future must abort any outbound call in flight.
pub trait SiteVerify: Send + Sync {
    fn verify(
        &self,
        request: &VerificationRequest,
    ) -> impl Future<Output = Result<VerificationResponse, ClientError>> + Send;
}
