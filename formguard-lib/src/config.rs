//! Form configuration.

use serde::{Deserialize, Serialize};

/// User-facing text of the form.
///
/// Every field has a default, so a partial document deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Acknowledgment shown after a successful submission.
    pub success_message: String,
    pub email_message: String,
    pub country_message: String,
    pub postal_message: String,
    pub confirm_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_message: "Congratulations! Your form was submitted successfully.".to_string(),
            email_message: "Please enter a valid email.".to_string(),
            country_message: "Please enter a top 25 country by population.".to_string(),
            postal_message: "Please enter a valid postal code for the selected country."
                .to_string(),
            confirm_message: "Passwords do not match.".to_string(),
        }
    }
}
