//! HTTP client for the siteverify endpoint.

use crate::error::ClientError;
use crate::SiteVerify;

use recaptcha_types::{VerificationRequest, VerificationResponse};
use reqwest::Url;
use std::time::Duration;

/// Google's verification endpoint.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Upper bound on a whole verification exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection establishment never gets longer than this, even with a larger
/// request timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how long to talk to the verification service.
#[derive(Clone, Debug)]
pub struct VerifierConfig {
    /// Absolute URL of the siteverify endpoint.
    pub endpoint: String,
    /// Timeout covering connect, send and body read.
    pub timeout: Duration,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            endpoint: SITEVERIFY_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the siteverify endpoint.
///
/// Sends `POST {endpoint}` with form fields `secret` and `response` and parses
/// the JSON reply. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct SiteVerifier {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    endpoint: Url,
}

impl SiteVerifier {
    /// Create a verifier for Google's endpoint with the default timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(VerifierConfig::default())
    }

    pub fn with_config(config: VerifierConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ClientError::Build(format!("invalid endpoint {}: {e}", config.endpoint)))?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(DEFAULT_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Exchange one token for the service's verdict.
    ///
    /// `POST {endpoint}` (form: secret, response) -> VerificationResponse
    pub async fn verify_token(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .form(&request.form_fields())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "siteverify request failed");
                ClientError::from_transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "siteverify returned error status");
            return Err(ClientError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(ClientError::from_transport)?;
        let parsed: VerificationResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "siteverify body is not a verification response");
            ClientError::InvalidBody(format!("failed to parse verification response: {e}"))
        })?;

        tracing::debug!(response = ?parsed, "received response from verification server");
        Ok(parsed)
    }
}

impl SiteVerify for SiteVerifier {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, ClientError> {
        self.verify_token(request).await
    }
}
