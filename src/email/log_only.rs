use async_trait::async_trait;
use tracing::info;
use ulid::Ulid;
use weagle_enquiry::{Mailer, OutboundEmail};

/// Logs messages instead of sending them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String> {
        let id = Ulid::new().to_string();

        info!(
            id = %id,
            from = %email.from,
            to = ?email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            "Email provider disabled, message logged instead of sent"
        );

        Ok(id)
    }
}
