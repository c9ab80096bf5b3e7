use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use weagle_enquiry::{Command, EnquiryPayload, Error, FormType, Mailer, OutboundEmail};

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> anyhow::Result<String> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email);
        Ok(format!("msg_{}", sent.len()))
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutboundEmail) -> anyhow::Result<String> {
        anyhow::bail!("provider unavailable")
    }
}

fn command(mailer: Arc<dyn Mailer>) -> Command {
    Command::new(
        mailer,
        "Weagle International <onboarding@resend.dev>",
        vec!["info@weagleinternational.com".to_owned()],
    )
}

fn payload(form_type: &str) -> EnquiryPayload {
    EnquiryPayload {
        name: Some("David Chen".to_owned()),
        email: Some("david@culinarybrands.example".to_owned()),
        form_type: Some(form_type.to_owned()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_submit_sends_one_email_to_fixed_inbox() -> anyhow::Result<()> {
    let mailer = Arc::new(RecordingMailer::default());
    let receipt = command(mailer.clone()).submit(payload("contact")).await?;

    assert_eq!(receipt.id, "msg_1");
    assert_eq!(receipt.form_type, FormType::Contact);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["info@weagleinternational.com".to_owned()]);
    assert_eq!(sent[0].from, "Weagle International <onboarding@resend.dev>");
    assert_eq!(sent[0].reply_to, "david@culinarybrands.example");
    assert!(sent[0].subject.starts_with("New Contact Form Submission"));

    Ok(())
}

#[tokio::test]
async fn test_any_other_form_type_uses_sample_template() -> anyhow::Result<()> {
    let mailer = Arc::new(RecordingMailer::default());
    let command = command(mailer.clone());

    for form_type in ["sample", "modal", ""] {
        let receipt = command.submit(payload(form_type)).await?;
        assert_eq!(receipt.form_type, FormType::Sample);
    }

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    for email in sent.iter() {
        assert!(email.subject.starts_with("New Sample & Pricing Request"));
    }

    Ok(())
}

#[tokio::test]
async fn test_validation_failure_never_reaches_mailer() {
    let mailer = Arc::new(RecordingMailer::default());
    let mut payload = payload("contact");
    payload.email = None;

    let err = command(mailer.clone()).submit(payload).await.unwrap_err();

    assert!(matches!(err, Error::Missing));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_failure_is_a_delivery_error() {
    let err = command(Arc::new(FailingMailer))
        .submit(payload("sample"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Delivery(_)));
    assert!(!err.is_validation());
    assert_eq!(err.public_message(), "Failed to send email");
}
