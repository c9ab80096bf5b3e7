//! Shared fixtures for router-level tests
//!
//! Builds the application router around in-memory mailers so requests can be
//! driven with `oneshot` without a network or an email provider.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use weagle::{
    AppState,
    config::{Config, EmailConfig, EmailProvider, ObservabilityConfig, ServerConfig, SiteConfig},
};
use weagle_enquiry::{Mailer, OutboundEmail};

pub const INBOX: &str = "info@weagleinternational.com";

/// Keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email);
        Ok(format!("re_test_{}", sent.len()))
    }
}

/// Provider that is always down
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutboundEmail) -> anyhow::Result<String> {
        anyhow::bail!("connection refused")
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            provider: EmailProvider::Log,
            recipients: vec![INBOX.to_string()],
            ..Default::default()
        },
        site: SiteConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app(mailer: Arc<dyn Mailer>) -> Router {
    let config = test_config();
    let enquiry_command = weagle_enquiry::Command::new(
        mailer,
        config.email.from_address.to_owned(),
        config.email.recipients.to_owned(),
    );

    weagle::routes::router(AppState {
        config,
        enquiry_command,
    })
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<String>) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
