use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use weagle_enquiry::{Mailer, OutboundEmail};

use crate::config::ResendConfig;

/// Resend HTTP API client
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
    reply_to: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        info!(
            api_url = %config.api_url,
            timeout_secs = config.timeout_secs,
            "Resend email provider initialized"
        );

        Ok(Self {
            client,
            endpoint: format!("{}/emails", config.api_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: &email.to,
                subject: &email.subject,
                html: &email.html,
                reply_to: &email.reply_to,
            })
            .send()
            .await
            .context("Failed to reach Resend")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Resend rejected email");
            anyhow::bail!("Resend returned {status}");
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .context("Failed to decode Resend response")?;

        Ok(body.id)
    }
}
