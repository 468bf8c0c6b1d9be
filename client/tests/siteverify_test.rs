//! Tests for SiteVerifier against a mock siteverify endpoint.
//!
//! Covers the wire contract (form fields, JSON reply) and the mapping of every
//! transport-level failure onto ClientError.

use std::time::Duration;

use recaptcha_client::{ClientError, SiteVerifier, SiteVerify, VerifierConfig};
use recaptcha_types::{ErrorKind, Secret, VerificationRequest, VerificationResponse};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERIFY_PATH: &str = "/recaptcha/api/siteverify";

fn verifier_for(server: &MockServer, timeout: Duration) -> SiteVerifier {
    SiteVerifier::with_config(VerifierConfig {
        endpoint: format!("{}{VERIFY_PATH}", server.uri()),
        timeout,
    })
    .unwrap()
}

fn request(token: &str) -> VerificationRequest {
    VerificationRequest::new(Secret::new("s1"), token)
}

#[tokio::test]
async fn posts_form_encoded_secret_and_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VERIFY_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("secret=s1&response=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "score": 0.9,
            "action": "login",
            "hostname": "example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_secs(5));
    let resp = verifier.verify(&request("abc")).await.unwrap();

    assert!(resp.success);
    assert_eq!(resp.score, Some(0.9));
    assert_eq!(resp.action.as_deref(), Some("login"));
    assert_eq!(resp.hostname.as_deref(), Some("example.com"));
}

#[tokio::test]
async fn empty_token_is_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string("secret=s1&response="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error-codes": ["missing-input-response"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_secs(5));
    let resp = verifier.verify(&request("")).await.unwrap();

    assert_eq!(
        resp,
        VerificationResponse::failed(["missing-input-response"])
    );
}

#[tokio::test]
async fn failure_reply_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "error-codes": ["invalid-input-secret"]
        })))
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_secs(5));
    let resp = verifier.verify(&request("abc")).await.unwrap();
    assert!(resp.reports_bad_secret());
}

#[tokio::test]
async fn non_success_status_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_secs(5));
    let err = verifier.verify(&request("abc")).await.unwrap_err();

    assert_eq!(err, ClientError::HttpStatus(503));
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}

#[tokio::test]
async fn undecodable_body_is_invalid_body_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_secs(5));
    let err = verifier.verify(&request("abc")).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidBody(_)), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": true, "score": 0.9, "action": "login"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let verifier = verifier_for(&server, Duration::from_millis(200));
    let err = verifier.verify(&request("abc")).await.unwrap_err();

    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}

#[tokio::test]
async fn closed_port_is_connection_failure() {
    let verifier = SiteVerifier::with_config(VerifierConfig {
        endpoint: "http://127.0.0.1:1/recaptcha/api/siteverify".into(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = verifier.verify(&request("abc")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}
