//! Guard configuration with TOML file and environment support.

use std::path::Path;
use std::time::Duration;

use recaptcha_client::{VerifierConfig, SITEVERIFY_URL};
use recaptcha_types::{Policy, Secret};
use serde::Deserialize;

use crate::GuardError;

/// Process-wide verification settings.
///
/// Read-only once a guard is built. Can be loaded from a TOML file via
/// [`GuardConfig::from_toml_file`], from the environment via
/// [`GuardConfig::from_env`], or built programmatically (e.g. for tests).
#[derive(Clone, Debug, Deserialize)]
pub struct GuardConfig {
    /// Site secret shared with the verification service.
    pub secret: Secret,

    /// Threshold applied when a call does not override it.
    /// `None` accepts every score.
    #[serde(default)]
    pub default_score_threshold: Option<f64>,

    /// Siteverify endpoint.
    #[serde(default = "default_verify_url")]
    pub verify_url: String,

    /// Timeout for one verification exchange, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Accept every token without contacting the service. Testing/CI only.
    #[serde(default)]
    pub disable_verification: bool,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_verify_url() -> String {
    SITEVERIFY_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

// ── Environment variables ──────────────────────────────────────────────

pub const ENV_PRIVATE_KEY: &str = "RECAPTCHA_PRIVATE_KEY";
pub const ENV_SCORE_THRESHOLD: &str = "RECAPTCHA_SCORE_THRESHOLD";
pub const ENV_VERIFY_URL: &str = "RECAPTCHA_VERIFY_URL";
pub const ENV_TIMEOUT_MS: &str = "RECAPTCHA_TIMEOUT_MS";
/// Presence alone (any value, even empty) turns the bypass on.
pub const ENV_DISABLE: &str = "RECAPTCHA_DISABLE";

// ── Impl ───────────────────────────────────────────────────────────────

impl GuardConfig {
    /// Configuration with the given secret and every other setting at its default.
    pub fn new(secret: impl Into<Secret>) -> Self {
        Self {
            secret: secret.into(),
            default_score_threshold: None,
            verify_url: default_verify_url(),
            timeout_ms: default_timeout_ms(),
            disable_verification: false,
        }
    }

    pub fn with_default_threshold(mut self, threshold: f64) -> Self {
        self.default_score_threshold = Some(threshold);
        self
    }

    pub fn with_verify_url(mut self, url: impl Into<String>) -> Self {
        self.verify_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_verification_disabled(mut self, disabled: bool) -> Self {
        self.disable_verification = disabled;
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GuardError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GuardError> {
        let config: Self = toml::from_str(s).map_err(|e| GuardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// - `RECAPTCHA_PRIVATE_KEY` (required)
    /// - `RECAPTCHA_SCORE_THRESHOLD` (optional, `0.0..=1.0`)
    /// - `RECAPTCHA_VERIFY_URL` (default: Google's siteverify)
    /// - `RECAPTCHA_TIMEOUT_MS` (default: 5000)
    /// - `RECAPTCHA_DISABLE` (present = bypass on)
    pub fn from_env() -> Result<Self, GuardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GuardConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GuardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_PRIVATE_KEY)
            .ok_or_else(|| GuardError::Config(format!("{ENV_PRIVATE_KEY} is required")))?;
        let mut config = Self::new(secret);

        if let Some(raw) = lookup(ENV_SCORE_THRESHOLD) {
            let threshold = raw.trim().parse::<f64>().map_err(|e| {
                GuardError::Config(format!("invalid {ENV_SCORE_THRESHOLD} {raw:?}: {e}"))
            })?;
            config.default_score_threshold = Some(threshold);
        }
        if let Some(url) = lookup(ENV_VERIFY_URL) {
            config.verify_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = raw.trim().parse().map_err(|e| {
                GuardError::Config(format!("invalid {ENV_TIMEOUT_MS} {raw:?}: {e}"))
            })?;
        }
        config.disable_verification = lookup(ENV_DISABLE).is_some();

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no verification could succeed with.
    pub fn validate(&self) -> Result<(), GuardError> {
        if self.secret.is_empty() {
            return Err(GuardError::Config("secret must not be empty".into()));
        }
        if let Some(t) = self.default_score_threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(GuardError::Config(format!(
                    "default_score_threshold must be within 0.0..=1.0, got {t}"
                )));
            }
        }
        if self.timeout_ms == 0 {
            return Err(GuardError::Config("timeout_ms must be greater than zero".into()));
        }
        if !(self.verify_url.starts_with("https://") || self.verify_url.starts_with("http://")) {
            return Err(GuardError::Config(format!(
                "verify_url must be an absolute http(s) URL, got {:?}",
                self.verify_url
            )));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Settings for the siteverify client.
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            endpoint: self.verify_url.clone(),
            timeout: self.timeout(),
        }
    }

    /// A per-call policy seeded with the configured default threshold.
    pub fn policy(&self) -> Policy {
        Policy {
            score_threshold: self.default_score_threshold,
            ..Policy::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = GuardConfig::from_toml_str(r#"secret = "s1""#).expect("should parse");
        assert_eq!(config.secret.expose(), "s1");
        assert_eq!(config.verify_url, SITEVERIFY_URL);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.default_score_threshold, None);
        assert!(!config.disable_verification);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            secret = "s1"
            default_score_threshold = 0.5
            timeout_ms = 1500
        "#;
        let config = GuardConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.default_score_threshold, Some(0.5));
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.verify_url, SITEVERIFY_URL); // default
    }

    #[test]
    fn toml_without_secret_is_rejected() {
        let err = GuardConfig::from_toml_str("timeout_ms = 100").unwrap_err();
        assert!(matches!(err, GuardError::Config(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = GuardConfig::from_toml_str("secret = \"s1\"\ndefault_score_threshold = 1.5")
            .unwrap_err();
        assert!(err.to_string().contains("default_score_threshold"));
    }

    #[test]
    fn validate_rejects_empty_secret_zero_timeout_and_bad_url() {
        assert!(GuardConfig::new("").validate().is_err());
        assert!(GuardConfig::new("s1")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
        assert!(GuardConfig::new("s1")
            .with_verify_url("siteverify")
            .validate()
            .is_err());
        assert!(GuardConfig::new("s1").validate().is_ok());
    }

    #[test]
    fn missing_file_returns_config_error() {
        let err = GuardConfig::from_toml_file("/nonexistent/recaptcha.toml").unwrap_err();
        assert!(matches!(err, GuardError::Config(_)));
    }

    #[test]
    fn lookup_reads_every_variable() {
        let config = GuardConfig::from_lookup(lookup_from(&[
            (ENV_PRIVATE_KEY, "s1"),
            (ENV_SCORE_THRESHOLD, "0.4"),
            (ENV_VERIFY_URL, "http://127.0.0.1:8080/siteverify"),
            (ENV_TIMEOUT_MS, "250"),
        ]))
        .unwrap();
        assert_eq!(config.secret.expose(), "s1");
        assert_eq!(config.default_score_threshold, Some(0.4));
        assert_eq!(config.verify_url, "http://127.0.0.1:8080/siteverify");
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert!(!config.disable_verification);
    }

    #[test]
    fn lookup_requires_private_key() {
        let err = GuardConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains(ENV_PRIVATE_KEY));
    }

    #[test]
    fn disable_variable_presence_turns_bypass_on() {
        let config =
            GuardConfig::from_lookup(lookup_from(&[(ENV_PRIVATE_KEY, "s1"), (ENV_DISABLE, "")]))
                .unwrap();
        assert!(config.disable_verification);
    }

    #[test]
    fn unparsable_threshold_is_rejected() {
        let err = GuardConfig::from_lookup(lookup_from(&[
            (ENV_PRIVATE_KEY, "s1"),
            (ENV_SCORE_THRESHOLD, "high"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_SCORE_THRESHOLD));
    }

    #[test]
    fn policy_is_seeded_with_default_threshold() {
        let config = GuardConfig::new("s1").with_default_threshold(0.6);
        let policy = config.policy();
        assert_eq!(policy.score_threshold, Some(0.6));
        assert_eq!(policy.expected_action, None);
        assert!(!policy.return_score);
    }
}
