use askama::Template;

use crate::{Enquiry, FormType, OutboundEmail, Product};

pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_MESSAGE: &str = "No message provided";
pub const NO_REQUIREMENTS: &str = "No additional requirements";

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/sample.html")]
struct SampleEmailTemplate<'a> {
    name: &'a str,
    company: &'a str,
    email: &'a str,
    phone: &'a str,
    product: &'a str,
    volume: &'a str,
    message: &'a str,
}

/// Builds the notification for the business inbox.
///
/// Replies go straight back to the submitter.
pub fn compose(
    enquiry: &Enquiry,
    from: &str,
    to: &[String],
) -> Result<OutboundEmail, askama::Error> {
    let phone = enquiry.phone.as_deref().unwrap_or(NOT_PROVIDED);

    let (subject, html) = match enquiry.form_type {
        FormType::Contact => {
            let html = ContactEmailTemplate {
                name: &enquiry.name,
                email: &enquiry.email,
                phone,
                message: enquiry.message.as_deref().unwrap_or(NO_MESSAGE),
            }
            .render()?;

            (
                format!("New Contact Form Submission from {}", enquiry.name),
                html,
            )
        }
        FormType::Sample => {
            let product = enquiry
                .product
                .as_deref()
                .map(Product::describe)
                .unwrap_or_else(|| NOT_SPECIFIED.to_owned());

            let html = SampleEmailTemplate {
                name: &enquiry.name,
                company: enquiry.company.as_deref().unwrap_or(NOT_PROVIDED),
                email: &enquiry.email,
                phone,
                product: &product,
                volume: enquiry.volume.as_deref().unwrap_or(NOT_SPECIFIED),
                message: enquiry.message.as_deref().unwrap_or(NO_REQUIREMENTS),
            }
            .render()?;

            let requester = enquiry.company.as_deref().unwrap_or(&enquiry.name);

            (
                format!("New Sample & Pricing Request from {requester}"),
                html,
            )
        }
    };

    Ok(OutboundEmail {
        from: from.to_owned(),
        to: to.to_vec(),
        subject,
        html,
        reply_to: enquiry.email.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry(form_type: FormType) -> Enquiry {
        Enquiry {
            name: "Maria Santos".to_owned(),
            company: None,
            email: "maria@example.com".to_owned(),
            phone: None,
            product: None,
            volume: None,
            message: None,
            form_type,
        }
    }

    fn recipients() -> Vec<String> {
        vec!["info@weagleinternational.com".to_owned()]
    }

    #[test]
    fn test_contact_email_uses_placeholders() {
        let email = compose(
            &enquiry(FormType::Contact),
            "Weagle <noreply@example.com>",
            &recipients(),
        )
        .unwrap();

        assert_eq!(email.subject, "New Contact Form Submission from Maria Santos");
        assert!(email.html.contains("New Contact Form Submission"));
        assert!(email.html.contains("Maria Santos"));
        assert!(email.html.contains("maria@example.com"));
        assert!(email.html.contains(NOT_PROVIDED));
        assert!(email.html.contains(NO_MESSAGE));
        assert!(!email.html.contains("Product Interest"));
        assert_eq!(email.reply_to, "maria@example.com");
        assert_eq!(email.to, recipients());
    }

    #[test]
    fn test_sample_email_falls_back_to_name_in_subject() {
        let email = compose(&enquiry(FormType::Sample), "noreply@example.com", &recipients())
            .unwrap();

        assert_eq!(
            email.subject,
            "New Sample & Pricing Request from Maria Santos"
        );
        assert!(email.html.contains("New Sample &amp; Pricing Request"));
        assert!(email.html.contains(NOT_SPECIFIED));
        assert!(email.html.contains(NO_REQUIREMENTS));
    }

    #[test]
    fn test_sample_email_lists_every_field() {
        let mut enquiry = enquiry(FormType::Sample);
        enquiry.company = Some("Premium Spice Importers".to_owned());
        enquiry.phone = Some("+44 20 7946 0000".to_owned());
        enquiry.product = Some("blended".to_owned());
        enquiry.volume = Some("500 kg".to_owned());
        enquiry.message = Some("Organic certification required".to_owned());

        let email = compose(&enquiry, "noreply@example.com", &recipients()).unwrap();

        assert_eq!(
            email.subject,
            "New Sample & Pricing Request from Premium Spice Importers"
        );
        assert!(email.html.contains("Premium Spice Importers"));
        assert!(email.html.contains("+44 20 7946 0000"));
        assert!(email.html.contains("Blended Spices"));
        assert!(email.html.contains("500 kg"));
        assert!(email.html.contains("Organic certification required"));
        assert!(!email.html.contains(NOT_PROVIDED));
    }

    #[test]
    fn test_submitter_markup_is_escaped() {
        let mut enquiry = enquiry(FormType::Contact);
        enquiry.message = Some("<script>alert(1)</script>".to_owned());

        let email = compose(&enquiry, "noreply@example.com", &recipients()).unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }
}
