//! Fundamental types for reCAPTCHA token verification.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the siteverify request and response, the per-call decision policy, the
//! verification outcome, and the error kind taxonomy.

pub mod error;
pub mod outcome;
pub mod policy;
pub mod request;
pub mod response;
pub mod secret;

pub use error::ErrorKind;
pub use outcome::Outcome;
pub use policy::Policy;
pub use request::VerificationRequest;
pub use response::VerificationResponse;
pub use secret::Secret;
