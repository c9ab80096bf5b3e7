use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Product categories offered in the sample & pricing form.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Blended,
    Pure,
    Seasonings,
    Custom,
}

impl Product {
    pub fn label(&self) -> &'static str {
        match self {
            Product::Blended => "Blended Spices",
            Product::Pure => "Pure Spice Powders",
            Product::Seasonings => "Seasonings",
            Product::Custom => "Custom Requirements",
        }
    }

    /// Human readable interest line for an email.
    ///
    /// Known categories are expanded to their label, anything else is kept as
    /// the submitter typed it.
    pub fn describe(value: &str) -> String {
        match Product::from_str(value) {
            Ok(product) => product.label().to_owned(),
            Err(_) => value.to_owned(),
        }
    }
}

/// Which form an enquiry came from.
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Footer / about-page contact form.
    Contact,
    /// Sample & pricing request modal.
    #[default]
    Sample,
}

impl FormType {
    /// Only the exact `contact` discriminator selects the contact form.
    pub fn from_discriminator(value: Option<&str>) -> Self {
        match value {
            Some("contact") => FormType::Contact,
            _ => FormType::Sample,
        }
    }
}
