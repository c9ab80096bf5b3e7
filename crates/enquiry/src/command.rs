use std::sync::Arc;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Error, FormType, Mailer, Result};

/// Request body posted by the website forms.
///
/// Every field is optional on the wire, required fields are checked when the
/// payload is turned into an [`Enquiry`].
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryPayload {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub product: Option<String>,
    pub volume: Option<String>,
    pub message: Option<String>,
    pub form_type: Option<String>,
}

#[derive(Debug, Clone, Validate)]
pub struct Enquiry {
    #[validate(length(max = 200))]
    pub name: String,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 200))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub product: Option<String>,
    #[validate(length(max = 200))]
    pub volume: Option<String>,
    #[validate(length(max = 5000))]
    pub message: Option<String>,
    pub form_type: FormType,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl TryFrom<EnquiryPayload> for Enquiry {
    type Error = Error;

    fn try_from(payload: EnquiryPayload) -> Result<Self> {
        let form_type = FormType::from_discriminator(payload.form_type.as_deref());

        let (Some(name), Some(email)) = (present(payload.name), present(payload.email)) else {
            return Err(Error::Missing);
        };

        let enquiry = Enquiry {
            name,
            company: present(payload.company),
            email,
            phone: present(payload.phone),
            product: present(payload.product),
            volume: present(payload.volume),
            // keep the submitter's line breaks, only drop blank messages
            message: payload.message.filter(|m| !m.trim().is_empty()),
            form_type,
        };

        enquiry.validate()?;

        Ok(enquiry)
    }
}

/// Outcome of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub id: String,
    pub form_type: FormType,
}

/// Relays enquiries to the fixed business inbox.
#[derive(Clone)]
pub struct Command {
    mailer: Arc<dyn Mailer>,
    from: String,
    recipients: Vec<String>,
}

impl Command {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        from: impl Into<String>,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            mailer,
            from: from.into(),
            recipients,
        }
    }

    /// Validates the payload and makes exactly one send attempt.
    pub async fn submit(&self, payload: EnquiryPayload) -> Result<Receipt> {
        let enquiry = Enquiry::try_from(payload)?;
        let email = crate::compose(&enquiry, &self.from, &self.recipients)?;

        let id = self.mailer.send(email).await.map_err(Error::Delivery)?;

        tracing::info!(
            id = %id,
            form_type = %enquiry.form_type,
            "Enquiry relayed to business inbox"
        );

        Ok(Receipt {
            id,
            form_type: enquiry.form_type,
        })
    }
}
