//! Successful verification result.

use serde::{Deserialize, Serialize};

/// Value handed back to the caller when a token is accepted.
///
/// `Token` passes the submitted token through unchanged so the caller can keep
/// treating the field as "the submitted token"; `Score` is returned when the
/// policy asks for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Token(String),
    Score(f64),
}

impl Outcome {
    /// Build the success value for `token` / `score` under the given return mode.
    pub fn accepted(token: &str, score: f64, return_score: bool) -> Self {
        if return_score {
            Outcome::Score(score)
        } else {
            Outcome::Token(token.to_string())
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Outcome::Token(t) => Some(t),
            Outcome::Score(_) => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Outcome::Score(s) => Some(*s),
            Outcome::Token(_) => None,
        }
    }
}
