// In-process tests for the contact route, driven against stub mail
// collaborators so no SMTP traffic ever happens.

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use portfolio_relay::{
    router, AppState, ContactSubmission, MailError, Mailer, OutgoingEmail, RelayConfig,
    CONTACT_SUBJECT, DEFAULT_ALLOWED_ORIGIN, DEFAULT_PORT, REPLY_FAILED, REPLY_SENT,
};
use std::sync::Arc;
use tower::ServiceExt;

struct AcceptingMailer;

impl Mailer for AcceptingMailer {
    fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Ok(())
    }
}

struct RejectingMailer;

impl Mailer for RejectingMailer {
    fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Transport("smtp unavailable".to_string()))
    }
}

fn test_app(mailer: impl Mailer + 'static) -> Router {
    router(
        AppState {
            mailer: Arc::new(mailer),
        },
        HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        "public",
    )
}

fn valid_body() -> String {
    serde_json::json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "message": "Hi",
    })
    .to_string()
}

fn contact_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn valid_submission_returns_confirmation() {
    let app = test_app(AcceptingMailer);
    let response = app.oneshot(contact_request(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, REPLY_SENT);
}

#[tokio::test]
async fn mailer_failure_returns_500_with_fixed_body() {
    let app = test_app(RejectingMailer);
    let response = app.oneshot(contact_request(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, REPLY_FAILED);
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_mailer_runs() {
    let app = test_app(RejectingMailer);
    let response = app
        .oneshot(contact_request("not json".to_string()))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn preflight_allows_only_the_configured_origin() {
    let app = test_app(AcceptingMailer);
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/contact")
        .header(header::ORIGIN, DEFAULT_ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(DEFAULT_ALLOWED_ORIGIN)
    );
}

#[test]
fn outgoing_email_carries_the_submission() {
    let submission = ContactSubmission {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        message: "Hi".to_string(),
    };
    let email = OutgoingEmail::from_submission(&submission);
    assert_eq!(email.subject, CONTACT_SUBJECT);
    assert_eq!(email.from, "Jane Doe <jane@example.com>");
    assert_eq!(email.reply_to, "jane@example.com");
    assert!(email.body.contains("Name: Jane Doe"));
    assert!(email.body.contains("Email: jane@example.com"));
    assert!(email.body.contains("Message: Hi"));
}

#[test]
fn submission_deserializes_from_camel_case() {
    let submission: ContactSubmission = serde_json::from_str(&valid_body()).unwrap();
    assert_eq!(submission.first_name, "Jane");
    assert_eq!(submission.last_name, "Doe");
}

#[test]
fn config_requires_credentials() {
    let err = RelayConfig::from_lookup(|_| None).unwrap_err();
    assert!(err.to_string().contains("EMAIL_USER"));
}

#[test]
fn config_applies_defaults_and_overrides() {
    let config = RelayConfig::from_lookup(|key| match key {
        "EMAIL_USER" => Some("site@example.com".to_string()),
        "EMAIL_PASSWORD" => Some("hunter2".to_string()),
        "RELAY_PORT" => Some("8080".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
    // The recipient defaults to the sending account.
    assert_eq!(config.recipient, "site@example.com");

    let config = RelayConfig::from_lookup(|key| match key {
        "EMAIL_USER" => Some("site@example.com".to_string()),
        "EMAIL_PASSWORD" => Some("hunter2".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}
