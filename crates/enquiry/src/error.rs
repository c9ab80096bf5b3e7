pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please provide a valid email address";
pub const TOO_LONG_MESSAGE: &str = "Submission is too long";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Name and email are required")]
    Missing,

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("failed to render email: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to send email: {0}")]
    Delivery(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validation failures are the caller's fault, everything else is ours.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Missing | Error::Validate(_))
    }

    /// Static text safe to return to the submitter.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Missing => MISSING_FIELDS_MESSAGE,
            Error::Validate(errors) if errors.field_errors().contains_key("email") => {
                INVALID_EMAIL_MESSAGE
            }
            Error::Validate(_) => TOO_LONG_MESSAGE,
            Error::Render(_) | Error::Delivery(_) => DELIVERY_FAILED_MESSAGE,
        }
    }
}
