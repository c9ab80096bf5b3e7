//! Lead-capture enquiries and their relay to the business inbox.
//!
//! An [`EnquiryPayload`] arrives from one of the website forms, is validated
//! into an [`Enquiry`], rendered into an [`OutboundEmail`] and handed to a
//! [`Mailer`] exactly once. Nothing is stored or retried.

mod command;
mod email;
mod error;
mod mailer;
mod value_object;

pub use command::*;
pub use email::*;
pub use error::*;
pub use mailer::*;
pub use value_object::*;
