//! # Errors
//!
//! The two failure kinds of the pure layer.
//!
//! ```text
//!   lookup by id ──────────► CoreError::ArtworkNotFound
//!   inquiry form / theme ──► ValidationError ──► CoreError::Validation
//!                                 │
//!                                 └─► translation_key()  "modal.errors.email.invalid"
//! ```
//!
//! Storage failures live in `atelier-db`, and the serialized shape the view
//! receives lives in the gallery app. Filtering never fails: every criterion
//! has an inactive state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Artwork not found: {0}")]
    ArtworkNotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// A rejected field value.
///
/// Each variant maps onto one inline message in the translation tables,
/// see [`ValidationError::translation_key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is empty")]
    Required { field: String },

    #[error("{field} is shorter than {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} does not look like an email address")]
    InvalidEmail { field: String },

    /// Value outside a closed set, such as a scheme or sort name.
    #[error("{field} accepts only {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidEmail { field }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }

    /// Dotted key of the message shown next to the field.
    ///
    /// ```rust
    /// use atelier_core::ValidationError;
    ///
    /// let err = ValidationError::Required { field: "name".to_string() };
    /// assert_eq!(err.translation_key(), "modal.errors.name.required");
    /// ```
    pub fn translation_key(&self) -> String {
        let (prefix, rule) = match self {
            ValidationError::Required { .. } => ("modal.errors", "required"),
            ValidationError::TooShort { .. } => ("modal.errors", "minLength"),
            ValidationError::TooLong { .. } => ("modal.errors", "maxLength"),
            ValidationError::InvalidEmail { .. } => ("modal.errors", "invalid"),
            ValidationError::NotAllowed { .. } => ("errors", "notAllowed"),
        };
        format!("{}.{}.{}", prefix, self.field(), rule)
    }
}
