//! Email delivery over SMTP using lettre

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;
use ulid::Ulid;
use weagle_enquiry::{Mailer, OutboundEmail};

use crate::config::SmtpConfig;

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP email provider initialized with authentication and TLS"
            );
            // relay() negotiates STARTTLS
            let creds = Credentials::new(config.username.clone(), config.password.clone());
            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

fn build_message(email: OutboundEmail, message_id: &str) -> anyhow::Result<Message> {
    let from: Mailbox = email.from.parse().context("Failed to parse from address")?;
    let reply_to: Mailbox = email
        .reply_to
        .parse()
        .context("Failed to parse reply-to address")?;

    let mut builder = Message::builder()
        .from(from)
        .reply_to(reply_to)
        .subject(email.subject)
        .message_id(Some(message_id.to_owned()))
        .header(ContentType::TEXT_HTML);

    for to in &email.to {
        let to: Mailbox = to.parse().context("Failed to parse recipient address")?;
        builder = builder.to(to);
    }

    builder
        .body(email.html)
        .context("Failed to build email message")
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String> {
        let domain = email
            .from
            .parse::<Mailbox>()
            .map(|mailbox| mailbox.email.domain().to_owned())
            .unwrap_or_else(|_| "localhost".to_owned());
        let message_id = format!("<{}@{domain}>", Ulid::new());

        let message = build_message(email, &message_id)?;

        // lettre's SmtpTransport blocks
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("SMTP send task panicked")?
            .context("SMTP server rejected email")?;

        Ok(message_id)
    }
}
