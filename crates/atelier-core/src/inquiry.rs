//! # Purchase Inquiry
//!
//! The form a visitor fills in to ask about buying a work, and the message
//! that is sent on their behalf.
//!
//! ```text
//! InquiryForm ──validate()──► Err(Vec<ValidationError>)   shown per field
//!      │
//!      └── ok ──message(language, title)──► text handed to the link builder
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Language;
use crate::validation::{validate_email, validate_min_length};

pub const NAME_MIN_LENGTH: usize = 2;
pub const ADDRESS_MIN_LENGTH: usize = 10;

/// Visitor contact details for a purchase inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl InquiryForm {
    /// Checks every field and collects one error per failing field,
    /// in form order.
    ///
    /// ## Example
    /// ```rust
    /// use atelier_core::inquiry::InquiryForm;
    ///
    /// let form = InquiryForm {
    ///     name: "A".to_string(),
    ///     email: "anna@example.nl".to_string(),
    ///     address: "".to_string(),
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// assert_eq!(errors[0].translation_key(), "modal.errors.name.minLength");
    /// assert_eq!(errors[1].translation_key(), "modal.errors.address.required");
    /// ```
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = [
            validate_min_length("name", &self.name, NAME_MIN_LENGTH),
            validate_email("email", &self.email),
            validate_min_length("address", &self.address, ADDRESS_MIN_LENGTH),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The inquiry text in the visitor's language.
    pub fn message(&self, language: Language, artwork_title: &str) -> String {
        let name = self.name.trim();
        let address = self.address.trim();
        let email = self.email.trim();

        match language {
            Language::Nl => format!(
                "Hallo, ik ben geïnteresseerd in de aankoop van '{}'. Mijn naam is {} en mijn adres is {}. Mijn e-mail is {}.",
                artwork_title, name, address, email
            ),
            Language::En => format!(
                "Hello, I'm interested in buying '{}'. My name is {} and my address is {}. My email is {}.",
                artwork_title, name, address, email
            ),
        }
    }
}
