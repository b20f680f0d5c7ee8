//! HTTP surface: the contact route plus static service for the section
//! pages. Each request is handled independently; there is no shared
//! mutable state.

use crate::contact::ContactSubmission;
use crate::mail::{Mailer, OutgoingEmail};
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub const REPLY_SENT: &str = "Message sent successfully!";
pub const REPLY_FAILED: &str = "Error sending message.";

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
}

pub fn router(state: AppState, allowed_origin: HeaderValue, public_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/contact", post(send_contact))
        .fallback_service(ServeDir::new(public_dir))
        .layer(cors)
        .with_state(state)
}

/// Relay one submission as an email. Failures are logged and surfaced as
/// a 500 with a fixed body; there is no retry.
async fn send_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, &'static str) {
    let email = OutgoingEmail::from_submission(&submission);
    let mailer = Arc::clone(&state.mailer);
    match tokio::task::spawn_blocking(move || mailer.send(&email)).await {
        Ok(Ok(())) => (StatusCode::OK, REPLY_SENT),
        Ok(Err(err)) => {
            log::error!("[contact] mail dispatch failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, REPLY_FAILED)
        }
        Err(err) => {
            log::error!("[contact] mail task failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, REPLY_FAILED)
        }
    }
}
