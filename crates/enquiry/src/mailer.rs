use async_trait::async_trait;

/// A fully composed message ready for the email provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Transactional email provider.
///
/// `send` makes a single attempt and returns the identifier the provider
/// assigned to the message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String>;
}
