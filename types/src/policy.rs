//! Per-call decision parameters.

use serde::{Deserialize, Serialize};

/// What a verification must satisfy to be accepted, and what it returns.
///
/// Supplied by the caller for each verification and never mutated during it.
/// Build one with [`Policy::new`] or seed it from the configured defaults and
/// override individual fields with the `with_*` methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Action label the token must have been issued for. Empty means unset.
    #[serde(default)]
    pub expected_action: Option<String>,
    /// Minimum accepted score. `None` disables the score check.
    #[serde(default)]
    pub score_threshold: Option<f64>,
    /// Return the score instead of the raw token on success.
    #[serde(default)]
    pub return_score: bool,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.expected_action = Some(action.into());
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    /// Drop any score threshold, including a configured default.
    pub fn without_threshold(mut self) -> Self {
        self.score_threshold = None;
        self
    }

    pub fn returning_score(mut self, return_score: bool) -> Self {
        self.return_score = return_score;
        self
    }

    /// The expected action, treating an empty label as unset.
    pub fn action_constraint(&self) -> Option<&str> {
        self.expected_action.as_deref().filter(|a| !a.is_empty())
    }
}
