//! Decision policy for siteverify replies.
//!
//! Pure and synchronous: given a parsed reply, the caller's [`Policy`] and the
//! submitted token, [`decide`] either accepts (returning the token or the
//! score) or raises a [`Rejection`]. It never performs I/O.
//!
//! [`Policy`]: recaptcha_types::Policy

pub mod decide;
pub mod error;

pub use decide::decide;
pub use error::Rejection;
