//! Error message templates.

use crate::config::FormConfig;
use crate::field::FieldId;
use crate::rules;

/// Message shown on postal while the selected country is invalid.
pub const SELECT_COUNTRY_FIRST: &str = "Please select a valid country first.";

/// Message shown on confirm when it is focused before the password is complete.
pub const COMPLETE_PASSWORD_FIRST: &str = "Please complete password first.";

/// An error message template for one field.
#[derive(Debug, Clone)]
pub enum ErrorMessage {
    /// The same text regardless of value.
    Static(String),
    /// Text computed from the current value.
    Dynamic(fn(&str) -> String),
}

impl ErrorMessage {
    /// Produce the message text for a value.
    pub fn resolve(&self, value: &str) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Dynamic(build) => build(value),
        }
    }
}

/// Error message templates for every field.
#[derive(Debug, Clone)]
pub struct Messages {
    email: ErrorMessage,
    country: ErrorMessage,
    postal: ErrorMessage,
    password: ErrorMessage,
    confirm: ErrorMessage,
}

impl Messages {
    /// Build the message table from configuration.
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            email: ErrorMessage::Static(config.email_message.clone()),
            country: ErrorMessage::Static(config.country_message.clone()),
            postal: ErrorMessage::Static(config.postal_message.clone()),
            password: ErrorMessage::Dynamic(rules::password_message),
            confirm: ErrorMessage::Static(config.confirm_message.clone()),
        }
    }

    /// Get the template selected for a field.
    pub fn get(&self, field: FieldId) -> &ErrorMessage {
        match field {
            FieldId::Email => &self.email,
            FieldId::Country => &self.country,
            FieldId::Postal => &self.postal,
            FieldId::Password => &self.password,
            FieldId::Confirm => &self.confirm,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}
