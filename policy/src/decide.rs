//! One-step classification of a siteverify reply.

use crate::error::Rejection;
use recaptcha_types::{Outcome, Policy, VerificationResponse};

/// Classify `response` under `policy`.
///
/// Failed replies:
/// - a secret-related error code (`missing-input-secret`, `invalid-input-secret`)
///   is `InvalidSecret`, even alongside other codes
/// - any other non-empty code set is `Expired`
/// - no codes at all is `MalformedResponse`
///
/// Successful replies are checked for the expected action first, then for the
/// score threshold (strict `<`, so a score equal to the threshold passes).
/// On acceptance the score is returned if `policy.return_score`, otherwise the
/// submitted `token` unchanged.
pub fn decide(
    response: &VerificationResponse,
    policy: &Policy,
    token: &str,
) -> Result<Outcome, Rejection> {
    if !response.success {
        return Err(classify_failure(response));
    }

    let (score, action) = match (response.score, response.action.as_deref()) {
        (Some(score), Some(action)) if score.is_finite() => (score, action),
        (score, action) => {
            tracing::warn!(?score, ?action, "successful reply without a usable score or action");
            return Err(Rejection::MalformedResponse(
                "successful reply must carry a finite score and an action".into(),
            ));
        }
    };

    if let Some(expected) = policy.action_constraint() {
        if expected != action {
            tracing::debug!(expected, action, "action mismatch");
            return Err(Rejection::ActionMismatch {
                action: action.to_string(),
            });
        }
    }

    if let Some(threshold) = policy.score_threshold {
        if score < threshold {
            tracing::debug!(score, threshold, "score below threshold");
            return Err(Rejection::ScoreTooLow { score });
        }
    }

    Ok(Outcome::accepted(token, score, policy.return_score))
}

fn classify_failure(response: &VerificationResponse) -> Rejection {
    if response.reports_bad_secret() {
        tracing::error!(
            error_codes = ?response.error_codes,
            "invalid reCAPTCHA secret key detected"
        );
        Rejection::InvalidSecret {
            error_codes: response.error_codes.clone(),
        }
    } else if !response.error_codes.is_empty() {
        Rejection::Expired {
            error_codes: response.error_codes.clone(),
        }
    } else {
        tracing::warn!("no error-codes received from the verification server");
        Rejection::MalformedResponse("failed reply carried no error codes".into())
    }
}
