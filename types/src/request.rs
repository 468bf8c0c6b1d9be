//! Outbound siteverify request.

use crate::secret::Secret;

/// One verification exchange: the site secret plus the client-supplied token.
///
/// Built per call and dropped afterwards. The token is sent as-is, even when
/// empty; the verification service is the authority on its validity.
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    pub secret: Secret,
    pub token: String,
}

impl VerificationRequest {
    pub fn new(secret: Secret, token: impl Into<String>) -> Self {
        Self {
            secret,
            token: token.into(),
        }
    }

    /// Form fields in wire order: `secret`, then `response`.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("secret", self.secret.expose()), ("response", &self.token)]
    }
}
