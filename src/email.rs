//! Transactional email providers behind [`weagle_enquiry::Mailer`]

mod log_only;
mod resend;
mod smtp;

use std::sync::Arc;

use weagle_enquiry::Mailer;

use crate::config::{EmailConfig, EmailProvider};

pub use log_only::LogMailer;
pub use resend::ResendMailer;
pub use smtp::SmtpMailer;

/// Create the mailer selected by `email.provider`
pub fn create_mailer(config: &EmailConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    let mailer: Arc<dyn Mailer> = match config.provider {
        EmailProvider::Resend => Arc::new(ResendMailer::new(&config.resend)?),
        EmailProvider::Smtp => Arc::new(SmtpMailer::new(&config.smtp)?),
        EmailProvider::Log => Arc::new(LogMailer),
    };

    Ok(mailer)
}
