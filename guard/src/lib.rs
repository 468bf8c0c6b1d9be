//! reCAPTCHA verification pipeline.
//!
//! [`RecaptchaGuard`] wires the siteverify client and the decision policy to
//! the process configuration:
//!
//! ```text
//! token + Policy -> SiteVerify::verify -> decide -> Outcome | VerificationError
//! ```
//!
//! The guard holds only read-only configuration and a pooled HTTP client, so
//! one instance can serve any number of concurrent verifications. Each call
//! is a single future; dropping it aborts the outbound request.
//!
//! The bypass switch (`disable_verification`) exists for test suites and CI.
//! It is off unless the deployment sets it explicitly.

pub mod config;
pub mod error;
pub mod guard;
pub mod logging;

pub use config::GuardConfig;
pub use error::{GuardError, VerificationError};
pub use guard::{RecaptchaGuard, BYPASS_SCORE};
pub use logging::{init_logging, LogFormat};

pub use recaptcha_client::{ClientError, NullVerifier, SiteVerifier, SiteVerify};
pub use recaptcha_policy::Rejection;
pub use recaptcha_types::{ErrorKind, Outcome, Policy, Secret, VerificationResponse};
